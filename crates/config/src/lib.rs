// Configuration Management
//
// This crate handles all configuration loading for the contact relay.
// It provides:
// - Configuration structs built from the process environment
// - YAML file loading, preferred over the environment when a file exists
// - Default configuration values
//
// Configuration is loaded once at startup and passed around as an
// immutable value; nothing else in the workspace reads the environment.

use std::path::Path;
use thiserror::Error;

pub mod types;

// Re-export all configuration types
pub use types::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found. Tried paths: {paths}")]
    FileNotFound { paths: String },

    #[error("Failed to read configuration file: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {source}")]
    ParseError {
        #[from]
        source: serde_yaml::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl RelayConfig {
    /// Load configuration from YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: RelayConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_first_of(&DEFAULT_CONFIG_PATHS)
    }

    /// Load the first YAML file in `paths` that exists
    pub fn load_first_of(paths: &[&str]) -> Result<Self, ConfigError> {
        for path in paths {
            if Path::new(path).exists() {
                return Self::load_from_file(path);
            }
        }

        Err(ConfigError::FileNotFound {
            paths: paths.join(", "),
        })
    }

    /// Load from the default YAML locations, or from the environment when
    /// no file is present
    pub fn load_or_env() -> Result<Self, ConfigError> {
        Self::load_or_env_from(&DEFAULT_CONFIG_PATHS)
    }

    /// Like [`RelayConfig::load_or_env`] with explicit YAML locations.
    ///
    /// Only a missing file falls back; an unreadable or invalid file is an error.
    pub fn load_or_env_from(paths: &[&str]) -> Result<Self, ConfigError> {
        match Self::load_first_of(paths) {
            Err(ConfigError::FileNotFound { .. }) => Self::from_env(),
            result => result,
        }
    }
}

/// YAML locations tried in order, relative to the working directory
pub const DEFAULT_CONFIG_PATHS: [&str; 3] =
    ["config/config.yaml", "config.yaml", "config/default.yaml"];
