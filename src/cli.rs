use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "ctflife", version, about = "Terminal client for CTF Life")]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the remote origin (e.g. http://127.0.0.1:8000)
    #[arg(long, value_name = "URL")]
    pub origin: Option<String>,

    /// Override the log filter used when RUST_LOG is unset
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Load the config file, apply flag overrides, and validate the result.
    ///
    /// Validation runs once, after the overrides, so a flag can replace a
    /// bad value from the file.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from_unvalidated(&path)?;

        if let Some(origin) = &self.origin {
            config.remote.origin = origin.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "ctflife",
            "--origin",
            "http://127.0.0.1:9000",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.origin.as_deref(), Some("http://127.0.0.1:9000"));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(cli.config.is_none());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["ctflife", "--backend", "x"]).is_err());
    }
}
