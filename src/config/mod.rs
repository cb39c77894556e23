pub mod types;

pub use types::{Config, ExpectedConfig, ExpectedVersion, KubectlConfig};

use crate::error::{ConfigError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".kubecheck.toml";

/// Get the global config file path (~/.kubecheck.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (cwd/.kubecheck.toml)
pub fn local_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Load configuration from file or use defaults.
///
/// An explicitly given path must load cleanly; discovered files (local first,
/// then global) fall back to the next candidate when unreadable or invalid.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config =
            toml::from_str(&content).map_err(|e| ConfigError::ParsingFailed(e.to_string()))?;
        return Ok(config);
    }

    let local = local_config_path();
    if local.exists() {
        if let Ok(content) = fs::read_to_string(&local) {
            if let Ok(config) = toml::from_str(&content) {
                debug!("Loaded configuration from {}", local.display());
                return Ok(config);
            }
        }
    }

    if let Some(global) = global_config_path() {
        if global.exists() {
            if let Ok(content) = fs::read_to_string(&global) {
                if let Ok(config) = toml::from_str(&content) {
                    debug!("Loaded configuration from {}", global.display());
                    return Ok(config);
                }
            }
        }
    }

    Ok(Config::default())
}
