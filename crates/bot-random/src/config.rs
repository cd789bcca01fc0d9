//! Bot configuration loading.
//!
//! Settings come from an optional TOML file; command-line flags override
//! them in `main`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Bot settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BotConfig {
    /// Name printed on the first output line.
    #[serde(default = "default_name")]
    pub name: String,
    /// Seed for the move generator.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Log at debug level, including per-turn pack and board dumps.
    #[serde(default)]
    pub verbose: bool,
}

fn default_name() -> String {
    "RandomDropBot".to_string()
}

fn default_seed() -> u64 {
    123456
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            name: default_name(),
            seed: default_seed(),
            verbose: false,
        }
    }
}

impl BotConfig {
    /// Loads `bot.toml` from the working directory, or defaults if it
    /// does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads a specific file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Default configuration file location.
    pub fn config_path() -> PathBuf {
        PathBuf::from("bot.toml")
    }
}
