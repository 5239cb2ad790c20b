use serde_json::Value;

/// Build the generation prompt for one explanation.
///
/// Callers reject blank inputs before getting here. Identifiers are embedded
/// as JSON string literals so quotes in the word survive the round trip.
pub fn build_prompt(word: &str, target_lang: &str, native_lang: &str) -> String {
    let word_lit = json_literal(word);
    let target_lit = json_literal(target_lang);
    let native_lit = json_literal(native_lang);

    format!(
        r#"You are an expert language learning assistant.
For the word {word_lit}, provide a comprehensive explanation for a learner whose native language is {native_lit} and who is learning {target_lit}.

Your response MUST be a single, valid JSON object with exactly these fields:
{{
  "word": string,
  "targetLang": string,
  "nativeLang": string,
  "definition": {{ "target": string, "native": string }},
  "examples": [ {{ "target": string, "native": string }} ],
  "pronunciation": {{ "phonetic": string, "tip": string }},
  "culturalNote": string,
  "learnerTip": string
}}

Provide 2-3 entries in "examples".
Write every "target" text in {target_lang} and every "native" text in {native_lang}.
Ensure all fields are populated with relevant and accurate information.

Copy these values into the JSON verbatim:
"word": {word_lit}
"targetLang": {target_lit}
"nativeLang": {native_lit}

Respond ONLY with the JSON object, no additional text or formatting."#
    )
}

fn json_literal(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}
