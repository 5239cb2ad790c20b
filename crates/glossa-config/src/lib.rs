use std::env;

use serde::{Deserialize, Serialize};

use self::backend::BackendConfig;
use self::server::ServerConfig;

pub mod backend;
pub mod server;

/// Which provider answers explanation requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    #[default]
    Live,
    Simulated,
}

impl ModeKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "live" => Some(ModeKind::Live),
            "simulated" | "sim" => Some(ModeKind::Simulated),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModeKind::Live => "live",
            ModeKind::Simulated => "simulated",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub server: ServerConfig,
    pub mode: ModeKind,
}

impl Config {
    pub fn new() -> Self {
        let mode = env::var("GLOSSA_MODE")
            .ok()
            .and_then(|v| ModeKind::parse(&v))
            .unwrap_or_default();

        Config {
            backend: BackendConfig::new(),
            server: ServerConfig::new(),
            mode,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            server: ServerConfig::default(),
            mode: ModeKind::default(),
        }
    }
}
