//! Configuration loading for the Stride TUI.
//!
//! Config comes from a TOML file named by `--config <path>` or the
//! `STRIDE_TUI_CONFIG` env var. With neither set, development defaults
//! apply (relay on localhost, signed out).

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TuiConfig {
    /// Base URL of the relay, e.g. `http://localhost:3001`.
    pub relay_base_url: String,
    pub request_timeout_ms: u64,
    pub tick_interval_ms: u64,
    /// Session token handed out by the external identity provider.
    /// Presence of a token is the signed-in signal; the TUI never
    /// inspects or validates it.
    pub session_token: Option<String>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            relay_base_url: "http://localhost:3001".to_string(),
            request_timeout_ms: 30_000,
            tick_interval_ms: 200,
            session_token: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config = match config_path_from_args().or_else(config_path_from_env) {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: TuiConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.relay_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "relay_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_interval_ms",
                reason: "must be > 0".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("STRIDE_TUI_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(TuiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let config = TuiConfig {
            relay_base_url: "  ".to_string(),
            ..TuiConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = TuiConfig {
            request_timeout_ms: 0,
            ..TuiConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parses_partial_toml() {
        let config: TuiConfig =
            toml::from_str("relay_base_url = \"http://relay:9000\"").unwrap();
        assert_eq!(config.relay_base_url, "http://relay:9000");
        assert_eq!(config.request_timeout_ms, 30_000);
        assert_eq!(config.session_token, None);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<TuiConfig, _> = toml::from_str("api_key = \"nope\"");
        assert!(result.is_err());
    }
}
