use std::sync::Arc;

use glossa_config::{Config, ModeKind};
use glossa_core::{ExplanationService, Mode};
use glossa_provider::{GeminiGenerator, TextGenerator};

/// Shared state handed to every handler
pub struct AppState {
    pub config: Config,
    pub service: ExplanationService,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        let mode = resolve_mode(&config);
        Self::with_mode(config, mode)
    }

    /// Use an explicit mode, e.g. a live mode around a custom generator
    pub fn with_mode(config: Config, mode: Mode) -> Arc<Self> {
        Arc::new(Self {
            config,
            service: ExplanationService::new(mode),
        })
    }
}

/// Pick the retrieval mode from configuration.
///
/// Live mode without a usable credential stays live: every request then fails
/// with a configuration error instead of quietly serving simulated data.
pub fn resolve_mode(config: &Config) -> Mode {
    match config.mode {
        ModeKind::Simulated => {
            tracing::info!("Using simulated explanations");
            Mode::Simulated
        }
        ModeKind::Live if !config.backend.has_credential() => {
            tracing::error!("GOOGLE_GEMINI_API_KEY is not set, live requests will fail");
            Mode::Live(None)
        }
        ModeKind::Live => match GeminiGenerator::new(&config.backend) {
            Ok(generator) => {
                tracing::info!(model = %config.backend.model, "Using live explanations");
                let generator: Arc<dyn TextGenerator> = Arc::new(generator);
                Mode::Live(Some(generator))
            }
            Err(e) => {
                tracing::error!("Failed to initialize Gemini client: {e}");
                Mode::Live(None)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_without_key_is_unconfigured() {
        let config = Config::default();
        assert!(matches!(resolve_mode(&config), Mode::Live(None)));
    }

    #[test]
    fn test_live_with_key_has_generator() {
        let mut config = Config::default();
        config.backend.api_key = "secret".to_string();
        assert!(matches!(resolve_mode(&config), Mode::Live(Some(_))));
    }

    #[test]
    fn test_simulated_ignores_key() {
        let mut config = Config::default();
        config.mode = ModeKind::Simulated;
        assert!(matches!(resolve_mode(&config), Mode::Simulated));
    }
}
