use clap::Parser;
use ctflife::cli::Cli;
use ctflife::config::{Config, ConfigError};
use std::time::Duration;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.remote.origin, "https://ctflife-demo.zeabur.app");
    assert_eq!(config.remote.token_path, "/auth/token");
    assert_eq!(
        config.remote.route_prefixes,
        vec!["/users", "/student", "/auth", "/course_content"]
    );
    assert_eq!(config.notifications.display_duration(), Duration::from_secs(3));
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("ctflife/config.toml"));
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config(
        r#"[remote]
origin = "http://127.0.0.1:8000"

[notifications]
display_ms = 1500
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.remote.origin, "http://127.0.0.1:8000");
    assert_eq!(config.remote.token_path, "/auth/token");
    assert_eq!(config.notifications.display_ms, 1500);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[remote\norigin = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_non_http_origin_fails_validation() {
    let (_dir, path) = write_config("[remote]\norigin = \"ftp://example.com\"\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => assert!(message.contains("http")),
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_relative_route_prefix_fails_validation() {
    let (_dir, path) = write_config("[remote]\nroute_prefixes = [\"auth\"]\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_cli_overrides_file() {
    let (_dir, path) = write_config("[logging]\nlevel = \"warn\"\n");
    let cli = Cli::try_parse_from([
        "ctflife",
        "--config",
        path.to_str().unwrap(),
        "--origin",
        "http://localhost:9999",
        "--log-level",
        "debug",
    ])
    .unwrap();
    let config = cli.load_config().unwrap();
    assert_eq!(config.remote.origin, "http://localhost:9999");
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_cli_bad_origin_fails_validation() {
    let cli = Cli::try_parse_from(["ctflife", "--config", "/nonexistent/config.toml", "--origin", "localhost"])
        .unwrap();
    assert!(matches!(
        cli.load_config(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_cli_origin_replaces_invalid_file_origin() {
    let (_dir, path) = write_config("[remote]\norigin = \"localhost:8000\"\n");
    let cli = Cli::try_parse_from([
        "ctflife",
        "--config",
        path.to_str().unwrap(),
        "--origin",
        "http://127.0.0.1:8000",
    ])
    .unwrap();
    let config = cli.load_config().unwrap();
    assert_eq!(config.remote.origin, "http://127.0.0.1:8000");
}

#[test]
fn test_load_from_unvalidated_keeps_invalid_values() {
    let (_dir, path) = write_config("[remote]\norigin = \"localhost:8000\"\n");
    let config = Config::load_from_unvalidated(&path).unwrap();
    assert_eq!(config.remote.origin, "localhost:8000");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}
