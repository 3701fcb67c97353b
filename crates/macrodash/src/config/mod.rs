//! Dashboard configuration.
//!
//! Loaded from `{data_dir}/config.yaml`. Every field is optional; a missing
//! file is created with the built-in defaults and a malformed one is logged
//! and ignored.

mod keybindings;

pub use keybindings::KeybindingsConfig;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::state::PolicyInputs;

const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Root configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Starting slider values for both dashboards
    pub defaults: PolicyInputs,
    pub keybindings: KeybindingsConfig,
}

impl DashboardConfig {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    /// Load the config file. A missing file is not an error.
    pub fn load(data_dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            ConfigError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let mut config: Self = serde_saphyr::from_str(&content).map_err(|e| {
            ConfigError::Parse(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.defaults = config.defaults.sanitized();

        Ok(config)
    }

    /// Load the config file, falling back to defaults on any error.
    ///
    /// On first run the defaults are written out so the file can be edited.
    /// An existing file is never overwritten, even when it fails to parse.
    pub fn load_or_default(data_dir: &Path) -> Self {
        if !Self::path(data_dir).exists() {
            let config = Self::default();
            match config.save(data_dir) {
                Ok(()) => tracing::info!(
                    "Wrote default configuration to {}",
                    Self::path(data_dir).display()
                ),
                Err(e) => tracing::warn!("Could not write default configuration: {e}"),
            }
            return config;
        }

        match Self::load(data_dir) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default configuration: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), ConfigError> {
        fs::create_dir_all(data_dir)
            .map_err(|e| ConfigError::Io(format!("Failed to create data directory: {}", e)))?;

        let yaml = serde_saphyr::to_string(self)
            .map_err(|e| ConfigError::Serialize(format!("Failed to serialize config: {}", e)))?;

        fs::write(Self::path(data_dir), yaml)
            .map_err(|e| ConfigError::Io(format!("Failed to write config: {}", e)))
    }
}
