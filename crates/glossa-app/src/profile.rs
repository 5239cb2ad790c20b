use std::env;
use std::fs;
use std::path::Path;

use anyhow::Context;
use glossa_config::Config;

/// Load configuration from a JSON file, or from the environment when no file
/// is given.
///
/// A file without a backend credential still picks up `GOOGLE_GEMINI_API_KEY`,
/// so secrets can stay out of config files.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("Loading config from environment");
        return Ok(Config::new());
    };

    tracing::info!("Loading config from {}", path.display());
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let mut config: Config = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    if !config.backend.has_credential() {
        if let Ok(key) = env::var("GOOGLE_GEMINI_API_KEY") {
            config.backend.api_key = key;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use glossa_config::ModeKind;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_load_from_file() {
        let path = env::temp_dir().join(format!("glossa-{}.json", Uuid::new_v4()));
        fs::write(
            &path,
            r#"{"mode": "simulated", "server": {"port": 9090}, "backend": {"api_key": "from-file"}}"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.mode, ModeKind::Simulated);
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.backend.api_key, "from-file");
    }

    #[test]
    fn test_missing_file_is_error() {
        let path = env::temp_dir().join(format!("glossa-missing-{}.json", Uuid::new_v4()));
        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let path = env::temp_dir().join(format!("glossa-bad-{}.json", Uuid::new_v4()));
        fs::write(&path, "not json").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
