use serde::Serialize;

/// Language offered to learners by the front end.
///
/// Labels are informational only, requests may name any language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SUPPORTED_LANGUAGES: [Language; 7] = [
    Language {
        value: "English",
        label: "English",
    },
    Language {
        value: "Spanish",
        label: "Español (Spanish)",
    },
    Language {
        value: "French",
        label: "Français (French)",
    },
    Language {
        value: "German",
        label: "Deutsch (German)",
    },
    Language {
        value: "Japanese",
        label: "日本語 (Japanese)",
    },
    Language {
        value: "Indonesian",
        label: "Bahasa Indonesia (Indonesian)",
    },
    Language {
        value: "Chinese",
        label: "中文 (Mandarin)",
    },
];

impl Language {
    /// Find a language by its value, ignoring case
    pub fn find(value: &str) -> Option<&'static Language> {
        SUPPORTED_LANGUAGES
            .iter()
            .find(|lang| lang.value.eq_ignore_ascii_case(value))
    }
}
