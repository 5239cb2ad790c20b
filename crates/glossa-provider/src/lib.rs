mod gemini;

pub use gemini::GeminiGenerator;

/// Text completion capability backing live explanations
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Complete the prompt and return the raw text, unparsed
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Request cancelled")]
    Cancelled,
}
