//! HTTP and command-line front ends for explanation retrieval.
//!
//! ## Endpoints
//!
//! - `GET /health` — status, version and active mode
//! - `GET /api/languages` — languages offered to learners
//! - `POST /api/generate-explanation` — retrieve one explanation

pub mod cli;
pub mod logging;
pub mod models;
pub mod profile;
pub mod routes;
pub mod state;

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;

use crate::state::AppState;

/// Build the router over shared state
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/languages", get(routes::languages))
        .route("/api/generate-explanation", post(routes::generate_explanation))
        .with_state(state)
}

/// Serve until `shutdown` resolves, then abort in-flight backend calls
pub async fn serve(
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let addr = state.config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(mode = state.service.mode().name(), "Listening on {addr}");

    let app = build_app(state.clone());
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            tracing::info!("Shutdown requested");
            state.service.shutdown();
        })
        .await
        .context("Server error")
}
