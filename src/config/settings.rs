//! TOML-based configuration for psql2ch.
//!
//! Example configuration:
//! ```toml
//! [inference]
//! enabled = true
//! key_suffix = "_id"
//!
//! [output]
//! format = "pretty"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::keys::DEFAULT_KEY_SUFFIX;

/// Environment variable pointing at a settings file.
pub const CONFIG_ENV_VAR: &str = "PSQL2CH_CONFIG";

/// Settings file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "psql2ch.toml";

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Primary key guessing.
    pub inference: InferenceSettings,

    /// CLI output.
    pub output: OutputSettings,
}

/// Primary key guessing settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InferenceSettings {
    /// Guess a key from column names.
    pub enabled: bool,

    /// Name suffix of key candidates.
    pub key_suffix: String,
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            key_suffix: DEFAULT_KEY_SUFFIX.to_string(),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Default output format of `convert`.
    pub format: OutputFormat,
}

/// How the CLI renders a conversion result.
///
/// Also the value of the CLI `--format` flag.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Compact JSON on one line.
    #[default]
    Json,
    /// Indented JSON.
    Pretty,
    /// Plain-text table, one row per column.
    Table,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `PSQL2CH_CONFIG`
    /// 2. `./psql2ch.toml`
    /// 3. `~/.config/psql2ch/config.toml`
    ///
    /// Falls back to defaults when none exists.
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("psql2ch").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Settings::default())
    }
}
