//! Configuration loading utilities
//!
//! Resolves the configuration file location and layers file, environment
//! and defaults into one validated [`Settings`].

use crate::{Result, config::Settings};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Configuration loader with multiple source support
#[derive(Debug)]
pub struct ConfigLoader {
    /// Default settings
    defaults: Settings,
}

impl ConfigLoader {
    /// Create new configuration loader
    pub fn new() -> Self {
        Self {
            defaults: Settings::default(),
        }
    }

    /// Get the config file path from HLTB_CONFIG or the default location
    ///
    /// Priority:
    /// 1. HLTB_CONFIG environment variable
    /// 2. ~/.config/hltb-client/config.toml (or platform equivalent)
    pub fn get_config_path() -> Option<PathBuf> {
        if let Ok(config_path) = std::env::var("HLTB_CONFIG") {
            let path = PathBuf::from(config_path);
            if path.exists() {
                debug!("Using config file from HLTB_CONFIG: {:?}", path);
                return Some(path);
            } else {
                warn!("HLTB_CONFIG points to non-existent file: {:?}", path);
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let default_path = config_dir.join("hltb-client").join("config.toml");
            if default_path.exists() {
                debug!("Using default config file: {:?}", default_path);
                return Some(default_path);
            }
        }

        debug!("No config file found");
        None
    }

    /// Load configuration with precedence order:
    /// 1. Environment variables
    /// 2. Configuration file
    /// 3. Default values
    ///
    /// Command line flags are applied by the caller on top of the result.
    pub fn load(&self, config_file: Option<&Path>) -> Result<Settings> {
        let mut settings = self.defaults.clone();

        if let Some(path) = config_file {
            if path.exists() {
                info!("Loading configuration from file: {:?}", path);
                settings = Settings::from_file(path)?;
            } else {
                warn!("Configuration file not found: {:?}, using defaults", path);
            }
        }

        debug!("Applying environment variable overrides");
        settings = settings.merge_with_env()?;

        settings.validate()?;

        debug!("Final configuration: {:?}", settings);

        Ok(settings)
    }

    /// Get default configuration
    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
