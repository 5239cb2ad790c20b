use glossa_provider::GenerateError;

#[derive(Debug, thiserror::Error)]
pub enum ExplainError {
    #[error("Backend credential is not configured")]
    Configuration,

    #[error("Missing required fields: {}", .fields.join(", "))]
    Validation { fields: Vec<&'static str> },

    #[error("Upstream provider failed: {0}")]
    Upstream(#[from] GenerateError),

    #[error(transparent)]
    MalformedResponse(#[from] MalformedResponse),
}

/// Backend text that could not be turned into an explanation.
///
/// `raw` keeps the offending completion for diagnostics only.
#[derive(Debug, thiserror::Error)]
#[error("Malformed backend response [{}]: {reason}", .reason.code())]
pub struct MalformedResponse {
    pub reason: MalformedReason,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("missing fields {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("definition must hold string target and native")]
    BadDefinition,

    #[error("examples must be a non-empty array")]
    BadExamples,

    #[error("pronunciation must hold string phonetic and tip")]
    BadPronunciation,

    #[error("record does not match schema: {0}")]
    SchemaMismatch(String),
}

impl MalformedReason {
    /// Stable machine-readable reason
    pub fn code(&self) -> &'static str {
        match self {
            MalformedReason::InvalidJson(_) => "invalid-json",
            MalformedReason::MissingFields(_) => "missing-fields",
            MalformedReason::BadDefinition => "bad-definition",
            MalformedReason::BadExamples => "bad-examples",
            MalformedReason::BadPronunciation => "bad-pronunciation",
            MalformedReason::SchemaMismatch(_) => "schema-mismatch",
        }
    }
}
