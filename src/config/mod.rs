//! Configuration module for psql2ch.
//!
//! Handles the optional settings file and its defaults.

mod settings;

pub use settings::{
    InferenceSettings, OutputFormat, OutputSettings, Settings, SettingsError, CONFIG_ENV_VAR,
    LOCAL_CONFIG_FILE,
};
