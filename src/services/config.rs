//! Config service for locating and loading the generator configuration
//!
//! Resolution order: an explicit path (must exist), then
//! `~/.fareseries/config.json` when present, then built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::types::{FareError, GeneratorConfig, Result};

/// Config file name inside the data directory
const CONFIG_FILE_NAME: &str = "config.json";

/// Loader for `GeneratorConfig`
pub struct ConfigService;

impl ConfigService {
    /// Load from `path`, or the default location, or fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<GeneratorConfig> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        match Self::default_config_path() {
            Ok(default_path) if default_path.is_file() => Self::load_from(&default_path),
            Ok(default_path) => {
                debug!(path = %default_path.display(), "no config file, using defaults");
                Ok(GeneratorConfig::default())
            }
            Err(e) => {
                debug!(error = %e, "config directory unavailable, using defaults");
                Ok(GeneratorConfig::default())
            }
        }
    }

    /// Parse a JSON config file
    pub fn load_from(path: &Path) -> Result<GeneratorConfig> {
        let content = fs::read_to_string(path)?;
        let config: GeneratorConfig = serde_json::from_str(&content)
            .map_err(|e| FareError::Parse(format!("{}: {}", path.display(), e)))?;
        info!(path = %path.display(), destinations = config.destinations.len(), "loaded config");
        Ok(config)
    }

    /// Get the default config path (~/.fareseries/config.json)
    pub fn default_config_path() -> Result<PathBuf> {
        let home = directories::UserDirs::new()
            .ok_or_else(|| FareError::Config("Failed to get home directory".into()))?
            .home_dir()
            .to_path_buf();
        Ok(home.join(".fareseries").join(CONFIG_FILE_NAME))
    }
}
