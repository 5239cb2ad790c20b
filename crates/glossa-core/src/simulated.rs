use std::collections::HashMap;
use std::sync::LazyLock;

use glossa_types::{Definition, ExplainRequest, Example, Explanation, Pronunciation};
use unicode_normalization::UnicodeNormalization;

static CORPUS: LazyLock<Corpus> = LazyLock::new(Corpus::with_defaults);

/// Explain a word without touching the network.
///
/// Curated entries are keyed by lower-cased word and exact target language;
/// anything else gets a templated record that always satisfies the schema.
pub fn simulate(request: &ExplainRequest) -> Explanation {
    match CORPUS.get(&request.word, &request.target_lang) {
        Some(entry) => {
            tracing::debug!("Simulated corpus hit for '{}'", request.word);
            entry.to_explanation(request)
        }
        None => {
            tracing::debug!("Simulated corpus miss for '{}', using template", request.word);
            templated(request)
        }
    }
}

/// Read-only curated explanations
pub struct Corpus {
    entries: HashMap<&'static str, HashMap<&'static str, CorpusEntry>>,
}

/// Language-specific payload, without the query identifiers
pub struct CorpusEntry {
    pub definition: (&'static str, &'static str),
    pub examples: &'static [(&'static str, &'static str)],
    pub phonetic: &'static str,
    pub tip: &'static str,
    pub cultural_note: &'static str,
    pub learner_tip: &'static str,
}

impl Corpus {
    /// Build the curated corpus
    pub fn with_defaults() -> Self {
        let mut entries: HashMap<&'static str, HashMap<&'static str, CorpusEntry>> = HashMap::new();

        let hello = entries.entry("hello").or_default();
        hello.insert(
            "French",
            CorpusEntry {
                definition: ("Bonjour / Salut", "Good day / Hi"),
                examples: &[
                    ("Bonjour, comment ça va ?", "Hello, how are you?"),
                    ("Salut Marie !", "Hi Marie!"),
                ],
                phonetic: "/bɔ̃.ʒuʁ/ /sa.ly/",
                tip: "'Bonjour' is more formal than 'Salut'. Pay attention to the nasal sounds.",
                cultural_note: "French people often greet with a 'la bise' (cheek kisses) among friends and family.",
                learner_tip: "Use 'Bonjour' in most situations, and 'Salut' with people you know well.",
            },
        );
        hello.insert(
            "Spanish",
            CorpusEntry {
                definition: ("Hola", "Hello"),
                examples: &[
                    ("Hola, ¿cómo estás?", "Hello, how are you?"),
                    ("¡Hola a todos!", "Hello everyone!"),
                ],
                phonetic: "/ˈo.la/",
                tip: "The 'h' is silent in Spanish. The 'o' is a pure vowel sound.",
                cultural_note: "Greetings in Spanish can be very warm and expressive, often accompanied by physical touch like a hug or pat on the back.",
                learner_tip: "'Hola' is a versatile greeting suitable for almost any situation.",
            },
        );
        hello.insert(
            "German",
            CorpusEntry {
                definition: ("Hallo / Guten Tag", "Hello / Good day"),
                examples: &[
                    ("Hallo, wie geht es Ihnen?", "Hello, how are you? (formal)"),
                    ("Guten Tag, Herr Schmidt.", "Good day, Mr. Schmidt."),
                ],
                phonetic: "/haˈloː/ /ˈɡuːtn̩ taːk/",
                tip: "The 'a' in 'Hallo' is short. 'Guten Tag' is more formal.",
                cultural_note: "Germans tend to be more formal in initial greetings, especially in business contexts. A firm handshake is common.",
                learner_tip: "Use 'Guten Tag' for formal situations or when addressing strangers, and 'Hallo' for more informal settings.",
            },
        );

        let ambiguous = entries.entry("ambiguous").or_default();
        ambiguous.insert(
            "French",
            CorpusEntry {
                definition: ("Ambigu / Ambigüe", "Ambiguous"),
                examples: &[
                    ("Sa réponse était très ambiguë.", "His/Her answer was very ambiguous."),
                    ("C'est une situation ambiguë.", "It's an ambiguous situation."),
                ],
                phonetic: "/ɑ̃.bi.ɡy/",
                tip: "The 'u' sound at the end is like the 'u' in 'tu'.",
                cultural_note: "French culture often appreciates subtlety and nuance in language, which can sometimes lead to perceived ambiguity.",
                learner_tip: "Remember the gender agreement: 'ambigu' for masculine nouns, 'ambiguë' for feminine nouns.",
            },
        );
        ambiguous.insert(
            "Spanish",
            CorpusEntry {
                definition: ("Ambiguo / Ambigua", "Ambiguous"),
                examples: &[
                    ("El mensaje es ambiguo.", "The message is ambiguous."),
                    ("Sus intenciones son ambiguas.", "His/Her intentions are ambiguous."),
                ],
                phonetic: "/amˈbi.ɣwo/",
                tip: "The 'g' before 'u' is a soft sound, almost like a 'w'.",
                cultural_note: "Clarity is often valued in Spanish communication, but poetic or literary language can embrace ambiguity.",
                learner_tip: "Like in French, pay attention to gender agreement: 'ambiguo' (m.) and 'ambigua' (f.).",
            },
        );
        ambiguous.insert(
            "German",
            CorpusEntry {
                definition: ("Mehrdeutig / Zweideutig", "Ambiguous / Equivocal"),
                examples: &[
                    ("Seine Aussage war mehrdeutig.", "His statement was ambiguous."),
                    ("Das ist eine zweideutige Bemerkung.", "That is an equivocal remark."),
                ],
                phonetic: "/ˈmeːɐ̯ˌdɔʏtɪç/ /ˈtsvaɪˌdɔʏtɪç/",
                tip: "'Mehrdeutig' implies multiple meanings, 'zweideutig' often implies a double entendre or something potentially suggestive.",
                cultural_note: "German language often strives for precision, so ambiguity might be viewed negatively in technical or business contexts, but appreciated in creative writing.",
                learner_tip: "Understand the slight difference: 'mehrdeutig' is generally 'having multiple meanings', while 'zweideutig' can carry a connotation of being intentionally obscure or suggestive.",
            },
        );

        Self { entries }
    }

    /// Look up a curated entry; the word is matched case-insensitively
    pub fn get(&self, word: &str, target_lang: &str) -> Option<&CorpusEntry> {
        let key = lookup_key(word);
        self.entries
            .get(key.as_str())
            .and_then(|langs| langs.get(target_lang))
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CorpusEntry {
    fn to_explanation(&self, request: &ExplainRequest) -> Explanation {
        Explanation {
            word: request.word.clone(),
            target_lang: request.target_lang.clone(),
            native_lang: request.native_lang.clone(),
            definition: Definition {
                target: self.definition.0.to_string(),
                native: self.definition.1.to_string(),
            },
            examples: self
                .examples
                .iter()
                .map(|(target, native)| Example {
                    target: target.to_string(),
                    native: native.to_string(),
                })
                .collect(),
            pronunciation: Pronunciation {
                phonetic: self.phonetic.to_string(),
                tip: self.tip.to_string(),
            },
            cultural_note: self.cultural_note.to_string(),
            learner_tip: self.learner_tip.to_string(),
        }
    }
}

fn lookup_key(word: &str) -> String {
    word.nfc().collect::<String>().to_lowercase()
}

fn templated(request: &ExplainRequest) -> Explanation {
    let ExplainRequest {
        word,
        target_lang: target,
        native_lang: native,
    } = request;

    Explanation {
        word: word.clone(),
        target_lang: target.clone(),
        native_lang: native.clone(),
        definition: Definition {
            target: format!("(Simulated) Definition of '{word}' in {target}."),
            native: format!("(Simulated) Meaning of '{word}' in {native}."),
        },
        examples: vec![
            Example {
                target: format!("Example sentence for '{word}' in {target}."),
                native: format!("Example translation in {native}."),
            },
            Example {
                target: format!("Another example for '{word}' in {target}."),
                native: format!("Another translation in {native}."),
            },
        ],
        pronunciation: Pronunciation {
            phonetic: format!("/{word}-fone-etik/"),
            tip: format!("Tip for pronouncing '{word}' in {target}."),
        },
        cultural_note: format!("A cultural note related to '{word}' or its usage in {target}."),
        learner_tip: format!("A helpful tip for learners about '{word}' in {target}."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_hit_keeps_casing() {
        let explanation = simulate(&ExplainRequest::new("Hello", "French", "English"));
        assert_eq!(explanation.word, "Hello");
        assert_eq!(explanation.definition.target, "Bonjour / Salut");
        assert_eq!(explanation.examples.len(), 2);
        assert_eq!(explanation.native_lang, "English");
    }

    #[test]
    fn test_lookup_ignores_word_case() {
        let upper = simulate(&ExplainRequest::new("AMBIGUOUS", "German", "English"));
        let lower = simulate(&ExplainRequest::new("ambiguous", "German", "English"));
        assert_eq!(upper.definition, lower.definition);
        assert_eq!(upper.word, "AMBIGUOUS");
    }

    #[test]
    fn test_target_language_is_exact() {
        let explanation = simulate(&ExplainRequest::new("hello", "french", "English"));
        assert!(explanation.definition.target.starts_with("(Simulated)"));
    }

    #[test]
    fn test_fallback_embeds_identifiers() {
        let explanation = simulate(&ExplainRequest::new("Zephyr", "Japanese", "Indonesian"));

        assert_eq!(explanation.word, "Zephyr");
        assert_eq!(
            explanation.definition.target,
            "(Simulated) Definition of 'Zephyr' in Japanese."
        );
        assert_eq!(
            explanation.definition.native,
            "(Simulated) Meaning of 'Zephyr' in Indonesian."
        );
        assert_eq!(explanation.examples.len(), 2);
        assert_eq!(explanation.pronunciation.phonetic, "/Zephyr-fone-etik/");
        assert!(explanation.cultural_note.contains("Zephyr"));
        assert!(explanation.learner_tip.contains("Japanese"));
    }

    #[test]
    fn test_every_output_has_examples() {
        let words = ["hello", "Ambiguous", "", "日本", "x y z", "ÉCOLE"];
        let langs = ["French", "Spanish", "German", "Chinese", ""];

        for word in words {
            for lang in langs {
                let explanation = simulate(&ExplainRequest::new(word, lang, "English"));
                assert!(!explanation.examples.is_empty());
                assert_eq!(explanation.word, word);
                assert_eq!(explanation.target_lang, lang);
            }
        }
    }

    #[test]
    fn test_simulation_is_deterministic() {
        let request = ExplainRequest::new("hello", "Spanish", "English");
        assert_eq!(simulate(&request), simulate(&request));

        let request = ExplainRequest::new("unknown", "Spanish", "English");
        assert_eq!(simulate(&request), simulate(&request));
    }

    #[test]
    fn test_corpus_size() {
        let corpus = Corpus::with_defaults();
        assert_eq!(corpus.len(), 6);
        assert!(!corpus.is_empty());
        assert!(corpus.get("HeLLo", "German").is_some());
        assert!(corpus.get("goodbye", "German").is_none());
    }
}
