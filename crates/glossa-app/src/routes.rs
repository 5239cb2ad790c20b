//! Axum route handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use glossa_types::{ExplainRequest, Explanation, Language, SUPPORTED_LANGUAGES};
use tracing::Instrument;
use uuid::Uuid;

use crate::models::{ApiError, HealthResponse};
use crate::state::AppState;

/// `GET /health`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        mode: state.service.mode().name().to_string(),
    })
}

/// `GET /api/languages`
pub async fn languages() -> Json<Vec<Language>> {
    Json(SUPPORTED_LANGUAGES.to_vec())
}

/// `POST /api/generate-explanation`
///
/// Body `{ word, targetLang, nativeLang }`. Failures answer `{ "error": ... }`;
/// backend details only go to the log.
pub async fn generate_explanation(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ExplainRequest>, JsonRejection>,
) -> Result<Json<Explanation>, ApiError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("explain", %request_id);

    async move {
        let Json(request) = body.map_err(|rejection| {
            tracing::warn!("Rejected request body: {rejection}");
            ApiError::new(StatusCode::BAD_REQUEST, "Invalid request body")
        })?;

        match state.service.retrieve(&request).await {
            Ok(explanation) => {
                tracing::info!("Explanation ready ({} examples)", explanation.examples.len());
                Ok(Json(explanation))
            }
            Err(e) => {
                let api_error = ApiError::from(&e);
                tracing::warn!(status = api_error.status.as_u16(), "Request failed: {e}");
                Err(api_error)
            }
        }
    }
    .instrument(span)
    .await
}
