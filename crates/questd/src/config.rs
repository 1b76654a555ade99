//! Configuration management for questd.
//!
//! Loads settings from /etc/learnquest/config.toml or uses defaults.

use quest_common::DEFAULT_PORT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/learnquest/config.toml";

/// Daemon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Bind address, localhost only by default
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Listen port (the original server's fixed port)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Optional JSON file overriding the built-in fixture set
    #[serde(default)]
    pub fixtures_path: Option<String>,
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            fixtures_path: None,
        }
    }
}

impl DaemonConfig {
    /// Load from the config file, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_PATH))
    }

    /// Load from a specific path, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("Invalid config at {}: {}. Using defaults.", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Cannot read {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }

    /// Socket address string for the listener
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
