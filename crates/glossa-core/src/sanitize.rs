use glossa_types::Explanation;
use serde_json::Value;

use crate::error::{MalformedReason, MalformedResponse};

/// Top-level keys every backend record must carry, in reporting order
pub const REQUIRED_FIELDS: [&str; 8] = [
    "word",
    "targetLang",
    "nativeLang",
    "definition",
    "examples",
    "pronunciation",
    "culturalNote",
    "learnerTip",
];

const FENCE: &str = "```";

/// Trim the text and unwrap a Markdown code fence if it starts with one.
///
/// A language tag after the opening fence (`json`, `JSON`, ...) is dropped too.
pub fn strip_code_fence(raw: &str) -> &str {
    let text = raw.trim();
    let Some(rest) = text.strip_prefix(FENCE) else {
        return text;
    };

    let tag_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+')))
        .unwrap_or(rest.len());
    let after_tag = &rest[tag_len..];
    let rest = if tag_len > 0
        && (after_tag.is_empty()
            || after_tag.starts_with(char::is_whitespace)
            || after_tag.starts_with(['{', '[']))
    {
        after_tag
    } else {
        rest
    };

    let rest = rest.trim();
    rest.strip_suffix(FENCE).unwrap_or(rest).trim()
}

/// Turn a raw completion into an explanation, or say exactly why it can't be.
///
/// Checks run in a fixed order and stop at the first failure: key presence
/// first (a `null` value still counts as present), then the shape of
/// `definition`, `examples` and `pronunciation`.
pub fn parse_explanation(raw: &str) -> Result<Explanation, MalformedResponse> {
    let malformed = |reason| MalformedResponse {
        reason,
        raw: raw.to_string(),
    };

    let cleaned = strip_code_fence(raw);

    let value: Value = serde_json::from_str(cleaned)
        .map_err(|e| malformed(MalformedReason::InvalidJson(e.to_string())))?;

    validate_structure(&value).map_err(&malformed)?;

    serde_json::from_value(value).map_err(|e| malformed(MalformedReason::SchemaMismatch(e.to_string())))
}

fn validate_structure(value: &Value) -> Result<(), MalformedReason> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| value.as_object().is_none_or(|obj| !obj.contains_key(**field)))
        .map(|field| field.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(MalformedReason::MissingFields(missing));
    }

    if !has_string_fields(&value["definition"], &["target", "native"]) {
        return Err(MalformedReason::BadDefinition);
    }

    if !value["examples"].as_array().is_some_and(|examples| !examples.is_empty()) {
        return Err(MalformedReason::BadExamples);
    }

    if !has_string_fields(&value["pronunciation"], &["phonetic", "tip"]) {
        return Err(MalformedReason::BadPronunciation);
    }

    Ok(())
}

fn has_string_fields(value: &Value, fields: &[&str]) -> bool {
    fields
        .iter()
        .all(|field| value.get(field).is_some_and(Value::is_string))
}
