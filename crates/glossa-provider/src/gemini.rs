use std::time::Duration;

use async_trait::async_trait;
use glossa_config::backend::BackendConfig;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{GenerateError, ProviderMetadata, TextGenerator};

/// Google Gemini `generateContent` client
#[derive(Clone)]
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiGenerator {
    pub fn new(config: &BackendConfig) -> Result<Self, GenerateError> {
        if !config.has_credential() {
            return Err(GenerateError::AuthenticationError);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_url, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        };

        tracing::debug!(model = %self.model, "Sending generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerateError::RateLimitExceeded);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(GenerateError::AuthenticationError);
        }

        let text = response.text().await?;

        if !status.is_success() {
            return Err(GenerateError::ApiError(extract_error_message(status, &text)));
        }

        extract_completion(&text)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google Gemini".to_string(),
            model: self.model.clone(),
            requires_api_key: true,
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Join the text parts of the first candidate
fn extract_completion(body: &str) -> Result<String, GenerateError> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| GenerateError::ApiError(format!("Failed to parse response: {}", e)))?;

    let parts = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts)
        .ok_or_else(|| GenerateError::ApiError("No candidates in response".to_string()))?;

    let text: String = parts.into_iter().filter_map(|p| p.text).collect();

    if text.is_empty() {
        return Err(GenerateError::ApiError("Empty completion in response".to_string()));
    }

    Ok(text)
}

/// Build a short message from an error body: `{ "error": { "message": ... } }`
/// when present, otherwise a clipped copy of the body
fn extract_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = v
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return format!("HTTP {}: {}", status.as_u16(), msg);
        }
    }

    let trimmed = body.trim();
    let snippet: String = if trimmed.chars().count() > 400 {
        format!("{}...", trimmed.chars().take(400).collect::<String>())
    } else {
        trimmed.to_string()
    };

    format!("HTTP {}: {}", status.as_u16(), snippet)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: &str) -> BackendConfig {
        BackendConfig {
            api_key: key.to_string(),
            api_url: "http://localhost:1/v1beta/".to_string(),
            ..BackendConfig::default()
        }
    }

    #[test]
    fn test_new_requires_credential() {
        let result = GeminiGenerator::new(&config_with_key("  "));
        assert!(matches!(result, Err(GenerateError::AuthenticationError)));
    }

    #[test]
    fn test_endpoint_includes_model() {
        let generator = GeminiGenerator::new(&config_with_key("secret")).unwrap();
        assert_eq!(
            generator.endpoint(),
            "http://localhost:1/v1beta/models/gemini-2.5-flash-preview-04-17:generateContent"
        );
        assert!(generator.metadata().requires_api_key);
    }

    #[test]
    fn test_extract_completion_joins_parts() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"word\":"}, {"text": " \"hi\"}"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;

        assert_eq!(extract_completion(body).unwrap(), "{\"word\": \"hi\"}");
    }

    #[test]
    fn test_extract_completion_without_candidates() {
        let result = extract_completion(r#"{"candidates": []}"#);
        assert!(matches!(result, Err(GenerateError::ApiError(_))));

        let result = extract_completion(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#);
        assert!(matches!(result, Err(GenerateError::ApiError(_))));
    }

    #[test]
    fn test_extract_error_message() {
        let body = r#"{"error": {"code": 400, "message": "model not found"}}"#;
        assert_eq!(
            extract_error_message(StatusCode::BAD_REQUEST, body),
            "HTTP 400: model not found"
        );

        let long = "x".repeat(500);
        let msg = extract_error_message(StatusCode::BAD_GATEWAY, &long);
        assert!(msg.starts_with("HTTP 502: "));
        assert!(msg.ends_with("..."));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let generator = GeminiGenerator::new(&config_with_key("secret")).unwrap();
        let result = generator.generate("hello").await;
        assert!(matches!(result, Err(GenerateError::NetworkError(_))));
    }
}
