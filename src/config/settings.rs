//! Optional interpreter settings
//!
//! Settings live in `gmake.yml` next to the script, or in `config.yml` under
//! the per-user config directory when the script has none.

use crate::error::{ConfigError, GmakeError};
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file looked up beside the script
pub const SETTINGS_FILE_NAME: &str = "gmake.yml";

/// Settings file looked up in the user config directory
pub const USER_SETTINGS_FILE_NAME: &str = "config.yml";

/// Default dotenv file, relative to the script directory
pub const DEFAULT_ENV_FILE: &str = ".env";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Shell invocation overriding the platform default (e.g., ["bash", "-c"])
    #[serde(default)]
    pub interpreter: Option<Vec<String>>,

    /// Dotenv file loaded before the script runs
    #[serde(default)]
    pub env_file: Option<String>,

    /// Variables stored before the script is parsed
    #[serde(default)]
    pub vars: HashMap<String, String>,
}

impl Settings {
    /// Parse settings from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self, GmakeError> {
        // An empty file deserializes as unit, not a mapping
        if yaml.trim().is_empty() {
            return Ok(Settings::default());
        }
        let settings: Settings = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(interpreter) = &self.interpreter {
            if interpreter.is_empty() || interpreter[0].trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "interpreter must name a program".to_string(),
                ));
            }
        }
        if self.vars.keys().any(|name| name.is_empty()) {
            return Err(ConfigError::Invalid(
                "variable names must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Dotenv path for a script directory
    pub fn env_file_path(&self, script_dir: &Path) -> PathBuf {
        script_dir.join(self.env_file.as_deref().unwrap_or(DEFAULT_ENV_FILE))
    }
}

/// Settings path for a script directory, falling back to the user config dir
pub fn find_settings_file(script_dir: &Path) -> Option<PathBuf> {
    let local = script_dir.join(SETTINGS_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    ProjectDirs::from("", "", "gmake")
        .map(|dirs| dirs.config_dir().join(USER_SETTINGS_FILE_NAME))
        .filter(|path| path.is_file())
}

/// Load settings for a script directory; defaults when no file exists
pub fn load_settings(script_dir: &Path) -> Result<Settings, GmakeError> {
    match find_settings_file(script_dir) {
        Some(path) => load_settings_file(&path),
        None => Ok(Settings::default()),
    }
}

/// Load settings from a specific file
pub fn load_settings_file(path: &Path) -> Result<Settings, GmakeError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ConfigError::Invalid(format!("Failed to read {}: {}", path.display(), e)))?;
    Settings::from_yaml(&contents)
}

/// Load a dotenv file into the process environment; a missing file is skipped
pub fn load_env_file(path: &Path) -> Result<bool, GmakeError> {
    if !path.is_file() {
        return Ok(false);
    }
    dotenvy::from_path(path).map_err(|e| {
        ConfigError::Invalid(format!("Failed to load {}: {}", path.display(), e))
    })?;
    Ok(true)
}
