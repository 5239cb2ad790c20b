use std::env;

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    "gemini-2.5-flash-preview-04-17".to_string()
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

/// Generative backend settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BackendConfig {
    /// Empty when no credential is configured
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Upper bound for a single completion call
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl BackendConfig {
    pub fn new() -> Self {
        let api_key = env::var("GOOGLE_GEMINI_API_KEY").unwrap_or_default();

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| default_model());

        let api_url = env::var("GEMINI_API_URL").unwrap_or_else(|_| default_api_url());

        let timeout_seconds = env::var("GEMINI_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            api_key,
            model,
            api_url,
            timeout_seconds,
        }
    }

    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            api_url: default_api_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
