use serde::{Deserialize, Serialize};

/// Learner-facing explanation of a word or phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    /// Original input, casing preserved
    pub word: String,
    pub target_lang: String,
    pub native_lang: String,
    pub definition: Definition,
    /// Never empty
    pub examples: Vec<Example>,
    pub pronunciation: Pronunciation,
    pub cultural_note: String,
    pub learner_tip: String,
}

/// Meaning in the language being learned and in the learner's own language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub target: String,
    pub native: String,
}

/// Example sentence with its translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub target: String,
    pub native: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronunciation {
    pub phonetic: String,
    pub tip: String,
}

/// Query identifiers for a single explanation lookup.
///
/// Absent keys deserialize as empty strings so the service can reject them
/// with its own input error instead of a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExplainRequest {
    pub word: String,
    pub target_lang: String,
    pub native_lang: String,
}

impl ExplainRequest {
    pub fn new(
        word: impl Into<String>,
        target_lang: impl Into<String>,
        native_lang: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            target_lang: target_lang.into(),
            native_lang: native_lang.into(),
        }
    }

    /// Names of the wire fields that are empty or whitespace-only
    pub fn blank_fields(&self) -> Vec<&'static str> {
        [
            ("word", &self.word),
            ("targetLang", &self.target_lang),
            ("nativeLang", &self.native_lang),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explanation_uses_camel_case_keys() {
        let explanation = Explanation {
            word: "Hello".to_string(),
            target_lang: "French".to_string(),
            native_lang: "English".to_string(),
            definition: Definition {
                target: "Bonjour".to_string(),
                native: "Hello".to_string(),
            },
            examples: vec![Example {
                target: "Bonjour !".to_string(),
                native: "Hello!".to_string(),
            }],
            pronunciation: Pronunciation {
                phonetic: "/bɔ̃.ʒuʁ/".to_string(),
                tip: String::new(),
            },
            cultural_note: String::new(),
            learner_tip: String::new(),
        };

        let json = serde_json::to_value(&explanation).unwrap();
        let object = json.as_object().unwrap();

        for key in [
            "word",
            "targetLang",
            "nativeLang",
            "definition",
            "examples",
            "pronunciation",
            "culturalNote",
            "learnerTip",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(object.len(), 8);
    }

    #[test]
    fn test_request_missing_keys_become_blank() {
        let request: ExplainRequest = serde_json::from_str(r#"{"word": "hello"}"#).unwrap();
        assert_eq!(request.word, "hello");
        assert_eq!(request.blank_fields(), vec!["targetLang", "nativeLang"]);
    }

    #[test]
    fn test_request_whitespace_is_blank() {
        let request = ExplainRequest::new("  ", "French", "English");
        assert_eq!(request.blank_fields(), vec!["word"]);
    }
}
