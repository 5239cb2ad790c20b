use std::sync::Arc;

use glossa_provider::{GenerateError, TextGenerator};
use glossa_types::{ExplainRequest, Explanation};
use tokio_util::sync::CancellationToken;

use crate::error::ExplainError;
use crate::prompt::build_prompt;
use crate::sanitize::parse_explanation;
use crate::simulated::simulate;

/// Retrieval path, chosen once per call
#[derive(Clone)]
pub enum Mode {
    /// Generative backend; `None` when no credential was configured
    Live(Option<Arc<dyn TextGenerator>>),
    /// Local deterministic corpus
    Simulated,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Live(_) => "live",
            Mode::Simulated => "simulated",
        }
    }
}

/// Retrieve one explanation in the given mode.
///
/// There is no fallback between modes and no retry: the first error ends the
/// call. Cancelling `cancel` while the backend is working surfaces as an
/// upstream error.
pub async fn retrieve_explanation(
    request: &ExplainRequest,
    mode: &Mode,
    cancel: &CancellationToken,
) -> Result<Explanation, ExplainError> {
    match mode {
        Mode::Live(generator) => {
            let generator = generator.as_ref().ok_or(ExplainError::Configuration)?;
            ensure_inputs(request)?;
            retrieve_live(request, &**generator, cancel).await
        }
        Mode::Simulated => {
            ensure_inputs(request)?;
            Ok(simulate(request))
        }
    }
}

fn ensure_inputs(request: &ExplainRequest) -> Result<(), ExplainError> {
    let fields = request.blank_fields();
    if fields.is_empty() {
        Ok(())
    } else {
        Err(ExplainError::Validation { fields })
    }
}

async fn retrieve_live(
    request: &ExplainRequest,
    generator: &dyn TextGenerator,
    cancel: &CancellationToken,
) -> Result<Explanation, ExplainError> {
    let prompt = build_prompt(&request.word, &request.target_lang, &request.native_lang);
    tracing::debug!("Built prompt ({} chars)", prompt.len());

    let result = tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(GenerateError::Cancelled),
        result = generator.generate(&prompt) => result,
    };
    let raw = result.inspect_err(|e| {
        let provider = generator.metadata().name;
        tracing::error!(%provider, "Live provider call failed: {e}");
    })?;

    tracing::debug!("Received completion ({} chars)", raw.len());

    let explanation = parse_explanation(&raw).inspect_err(|e| {
        tracing::error!(reason = e.reason.code(), "Rejected backend response: {}", e.reason);
        tracing::error!("Raw response: {}", e.raw);
    })?;

    Ok(explanation)
}

/// Explanation retrieval bound to one mode
#[derive(Clone)]
pub struct ExplanationService {
    mode: Mode,
    cancel: CancellationToken,
}

impl ExplanationService {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            cancel: CancellationToken::new(),
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Retrieve an explanation; aborted when [`Self::shutdown`] is called
    pub async fn retrieve(&self, request: &ExplainRequest) -> Result<Explanation, ExplainError> {
        self.retrieve_with_cancel(request, &self.cancel.child_token())
            .await
    }

    pub async fn retrieve_with_cancel(
        &self,
        request: &ExplainRequest,
        cancel: &CancellationToken,
    ) -> Result<Explanation, ExplainError> {
        tracing::info!(
            mode = self.mode.name(),
            "Retrieving explanation for '{}' ({} -> {})",
            request.word,
            request.native_lang,
            request.target_lang
        );
        retrieve_explanation(request, &self.mode, cancel).await
    }

    /// Abort every in-flight live call
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}
