//! JSON bodies returned by the HTTP API that are not explanations.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use glossa_core::{ExplainError, MalformedReason};
use serde::{Deserialize, Serialize};

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub mode: String,
}

/// Outward failure: one status and a message safe to show the caller
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<&ExplainError> for ApiError {
    fn from(err: &ExplainError) -> Self {
        match err {
            ExplainError::Configuration => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Google Gemini API key is not configured",
            ),
            ExplainError::Validation { .. } => ApiError::new(
                StatusCode::BAD_REQUEST,
                "Missing required fields: word, targetLang, and nativeLang are required",
            ),
            ExplainError::Upstream(_) => ApiError::new(
                StatusCode::BAD_GATEWAY,
                "Internal server error while generating explanation",
            ),
            ExplainError::MalformedResponse(malformed) => {
                let message = match &malformed.reason {
                    MalformedReason::InvalidJson(_) => {
                        "Invalid JSON response from AI model".to_string()
                    }
                    MalformedReason::MissingFields(fields) => format!(
                        "Invalid response structure: missing fields {}",
                        fields.join(", ")
                    ),
                    MalformedReason::BadDefinition => {
                        "Invalid definition structure in response".to_string()
                    }
                    MalformedReason::BadExamples => {
                        "Invalid examples structure in response".to_string()
                    }
                    MalformedReason::BadPronunciation => {
                        "Invalid pronunciation structure in response".to_string()
                    }
                    MalformedReason::SchemaMismatch(_) => {
                        "Invalid response structure from AI model".to_string()
                    }
                };
                ApiError::new(StatusCode::BAD_GATEWAY, message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}
