//! Configuration loading for flokkrd.
//!
//! Configuration is loaded from TOML files with the following resolution
//! order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.flokkr/config.toml` (user)
//! 3. built-in defaults
//!
//! API keys never live in this file; they come from the environment.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{FlokkrError, Result};

/// Daemon configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub classifier: ClassifierSection,
}

/// Server network configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:7420).
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            limits: LimitsConfig::default(),
        }
    }
}

fn default_address() -> String {
    "127.0.0.1:7420".to_string()
}

/// Request limits.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum texts per batch or uploaded file (default: 100).
    #[serde(default = "default_max_batch")]
    pub max_batch_size: usize,
    /// Maximum upload size in bytes (default: 16 MiB).
    #[serde(default = "default_max_upload")]
    pub max_upload_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_batch_size: default_max_batch(),
            max_upload_bytes: default_max_upload(),
        }
    }
}

fn default_max_batch() -> usize {
    100
}

fn default_max_upload() -> usize {
    16 * 1024 * 1024
}

/// Classifier defaults for the daemon.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassifierSection {
    /// Model to use (default: the crate-wide default model).
    #[serde(default)]
    pub model: Option<String>,
    /// Path to a classifier config file (labels + prompt template).
    #[serde(default)]
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// An explicit path must exist; otherwise `~/.flokkr/config.toml` is
    /// used when present, and built-in defaults apply when it is not.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(FlokkrError::Configuration(format!(
                    "config file not found: {path:?}"
                )));
            }
            return Self::load_from_file(path);
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".flokkr").join("config.toml");
            if user_config.exists() {
                return Self::load_from_file(&user_config);
            }
        }

        Ok(Config::default())
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            FlokkrError::Configuration(format!("failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            FlokkrError::Configuration(format!("failed to parse config file {path:?}: {e}"))
        })
    }
}
