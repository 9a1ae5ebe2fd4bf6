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
    /// Uses `~/.config/ctflife/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("ctflife").join("config.toml")
    }

    /// Loads configuration from `path` and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_from_unvalidated(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses `path` without validating, so callers can layer
    /// overrides on top before calling [`Config::validate`].
    ///
    /// A missing file yields `Config::default()`.
    pub fn load_from_unvalidated(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The origin is an http(s) URL
    /// - Every route prefix and the token path are absolute paths
    /// - The token path is covered by a route prefix
    /// - Notifications stay visible for a non-zero time
    pub fn validate(&self) -> Result<(), ConfigError> {
        let remote = &self.remote;
        if !(remote.origin.starts_with("http://") || remote.origin.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("Origin '{}' must start with http:// or https://", remote.origin),
            });
        }

        if let Some(prefix) = remote.route_prefixes.iter().find(|p| !p.starts_with('/')) {
            return Err(ConfigError::ValidationError {
                message: format!("Route prefix '{}' must start with '/'", prefix),
            });
        }

        if !remote.token_path.starts_with('/') {
            return Err(ConfigError::ValidationError {
                message: format!("Token path '{}' must start with '/'", remote.token_path),
            });
        }

        let routed = remote
            .route_prefixes
            .iter()
            .any(|prefix| crate::api::routes::prefix_matches(prefix, &remote.token_path));
        if !routed {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Token path '{}' is not covered by any route prefix",
                    remote.token_path
                ),
            });
        }

        if self.notifications.display_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "notifications.display_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/ctflife/config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn token_path_outside_routes_is_rejected() {
        let mut config = Config::default();
        config.remote.token_path = "/oauth/token".to_string();
        match config.validate() {
            Err(ConfigError::ValidationError { message }) => {
                assert!(message.contains("not covered"));
            }
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn zero_display_time_is_rejected() {
        let mut config = Config::default();
        config.notifications.display_ms = 0;
        assert!(config.validate().is_err());
    }
}
