//! Client configuration.
//!
//! Loaded once at startup from a TOML file, then overridden by CLI flags.

pub mod credentials;
pub mod loader;
pub mod types;

pub use credentials::SecureString;
pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, NotificationConfig, RemoteConfig};
