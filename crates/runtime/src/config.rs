//! Runtime configuration loaded from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use battle_core::BattleConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config TOML")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Runtime configuration shared across the orchestrator and workers.
///
/// Every field has a default, so a TOML file only needs the values it
/// overrides:
///
/// ```toml
/// max_concurrent_matches = 8
///
/// [battle]
/// max_turns = 200
/// status_on_hit = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub battle: BattleConfig,
    pub command_buffer_size: usize,
    pub event_buffer_size: usize,
    /// Upper bound on simulations running at the same time.
    pub max_concurrent_matches: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            command_buffer_size: 32,
            event_buffer_size: 100,
            max_concurrent_matches: 4,
        }
    }
}

impl RuntimeConfig {
    /// Load config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.command_buffer_size == 0 {
            return Err(ConfigError::Invalid("command_buffer_size must be positive"));
        }
        if self.event_buffer_size == 0 {
            return Err(ConfigError::Invalid("event_buffer_size must be positive"));
        }
        if self.max_concurrent_matches == 0 {
            return Err(ConfigError::Invalid("max_concurrent_matches must be positive"));
        }
        Ok(())
    }
}
