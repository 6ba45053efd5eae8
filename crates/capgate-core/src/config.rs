//! Engine and relay configuration.
//!
//! Loaded from `capgate.toml` when present, otherwise defaults. The
//! endpoint can also be overridden with the `CAPGATE_ENDPOINT` environment
//! variable. The relay credential (`ANTHROPIC_API_KEY`) is env-only and
//! never read from or written to the file.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default completion endpoint: the local relay's fixed path.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/chat";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_model() -> String {
    "claude-3-5-sonnet-latest".to_string()
}

fn default_max_tokens() -> u32 {
    300
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where submissions are POSTed.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout for the completion call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Model the relay requests from the hosted completion service.
    #[serde(default = "default_model")]
    pub model: String,

    /// Token cap for the relay's upstream call.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            model: default_model(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl Config {
    /// Load from a TOML file, falling back to defaults when the file is
    /// absent. A file that exists but fails to parse is an error.
    pub fn load(path: &Path) -> io::Result<Self> {
        if !path.exists() {
            return Ok(Self::default().with_env_overrides());
        }
        let raw = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&raw)
            .map_err(|e| io::Error::other(format!("invalid config {}: {}", path.display(), e)))?;
        Ok(config.with_env_overrides())
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(endpoint) = std::env::var("CAPGATE_ENDPOINT") {
            if !endpoint.is_empty() {
                self.endpoint = endpoint;
            }
        }
        self
    }
}
