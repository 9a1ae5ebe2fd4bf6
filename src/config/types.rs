use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote service the client talks to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Scheme + host of the remote service (e.g., "https://ctflife-demo.zeabur.app").
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Path of the token-issuance endpoint.
    #[serde(default = "default_token_path")]
    pub token_path: String,
    /// Path prefixes forwarded to `origin`.
    #[serde(default = "default_route_prefixes")]
    pub route_prefixes: Vec<String>,
}

/// Notification banner settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a banner stays visible, in milliseconds (default: 3000).
    #[serde(default = "default_display_ms")]
    pub display_ms: u64,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the platform cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_origin() -> String {
    "https://ctflife-demo.zeabur.app".to_string()
}

fn default_token_path() -> String {
    "/auth/token".to_string()
}

fn default_route_prefixes() -> Vec<String> {
    ["/users", "/student", "/auth", "/course_content"]
        .iter()
        .map(|prefix| prefix.to_string())
        .collect()
}

fn default_display_ms() -> u64 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            token_path: default_token_path(),
            route_prefixes: default_route_prefixes(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_ms: default_display_ms(),
        }
    }
}

impl NotificationConfig {
    pub fn display_duration(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Resolved log file path.
    pub fn file_path(&self) -> PathBuf {
        match &self.file {
            Some(path) => path.clone(),
            None => dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("ctflife")
                .join("ctflife.log"),
        }
    }
}
