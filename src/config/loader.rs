//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// File name looked up inside a config directory.
pub const CONFIG_FILE_NAME: &str = "app.toml";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load `<dir>/app.toml`, falling back to defaults when the file is absent.
pub fn load_config_dir(dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        tracing::debug!(path = ?path, "No config file found, using defaults");
        return Ok(AppConfig::default());
    }

    let config = load_config(&path)?;
    tracing::debug!(path = ?path, env = %config.env, "Configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_config() {
        let config = parse_config(
            r#"
            env = "local"
            [server]
            host = "0.0.0.0"
            port = 9000
            "#,
        )
        .unwrap();

        assert_eq!(config.server.bind_address(), "0.0.0.0:9000");
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[server\nport = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let err = parse_config("[server]\nport = \"eighty\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_lists_problems() {
        let err = parse_config("env = \"\"\n[timeouts]\nrequest_secs = 0").unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("Validation failed: "));
        assert!(message.contains("env must not be empty"));
        assert!(message.contains("request_secs"));
    }

    #[test]
    fn test_load_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config_dir(dir.path()).unwrap(), AppConfig::default());

        fs::write(dir.path().join(CONFIG_FILE_NAME), "env = \"testing\"").unwrap();
        assert_eq!(load_config_dir(dir.path()).unwrap().env, "testing");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
