use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/bart-summarizer/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("bart-summarizer").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file is not an error: built-in defaults are returned.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The endpoint URL is an http(s) URL
    /// - Generation lengths are positive and ordered
    /// - The input limit is positive
    /// - The credential env var name is set
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.endpoint.url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::ValidationError {
                message: format!("Endpoint URL '{}' must start with http:// or https://", url),
            });
        }

        let generation = &self.generation;
        if generation.max_length == 0 {
            return Err(ConfigError::ValidationError {
                message: "generation.max_length must be greater than 0".to_string(),
            });
        }
        if generation.min_length > generation.max_length {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "generation.min_length ({}) exceeds generation.max_length ({})",
                    generation.min_length, generation.max_length
                ),
            });
        }

        if self.input.max_chars == 0 {
            return Err(ConfigError::ValidationError {
                message: "input.max_chars must be greater than 0".to_string(),
            });
        }

        if self.credentials.env_var.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "credentials.env_var must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
