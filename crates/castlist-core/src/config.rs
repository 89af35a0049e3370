//! Castlist configuration management.
//!
//! Handles configuration from environment variables and an optional TOML
//! file with sensible defaults. These are presentation-layer defaults
//! (which column to read, filter threshold, preview size); the analysis
//! functions themselves take everything as explicit parameters.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("failed to read config file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Default knobs for the castlist CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 1-based column holding character names
    pub column: usize,

    /// Minimum mention count for the report filter
    pub min_mentions: usize,

    /// Merge names that differ only by case
    pub ignore_case: bool,

    /// Rows shown per table by the preview command
    pub preview_rows: usize,

    /// Log level filter (overridden by RUST_LOG)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            column: 2,
            min_mentions: 1,
            ignore_case: false,
            preview_rows: 5,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the file named by
    /// `CASTLIST_CONFIG` (if set), then `CASTLIST_*` variable overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("CASTLIST_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::FileRead {
            path: path.clone(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `CASTLIST_*` environment variable overrides
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(v) = std::env::var("CASTLIST_COLUMN") {
            self.column = parse_var("CASTLIST_COLUMN", &v)?;
        }
        if let Ok(v) = std::env::var("CASTLIST_MIN_MENTIONS") {
            self.min_mentions = parse_var("CASTLIST_MIN_MENTIONS", &v)?;
        }
        if let Ok(v) = std::env::var("CASTLIST_IGNORE_CASE") {
            self.ignore_case = parse_var("CASTLIST_IGNORE_CASE", &v)?;
        }
        if let Ok(v) = std::env::var("CASTLIST_PREVIEW_ROWS") {
            self.preview_rows = parse_var("CASTLIST_PREVIEW_ROWS", &v)?;
        }
        if let Ok(v) = std::env::var("CASTLIST_LOG") {
            self.log_level = v;
        }
        self.validate()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.column == 0 {
            return Err(ConfigError::InvalidValue {
                key: "column".to_string(),
                value: "0 (columns are 1-based)".to_string(),
            });
        }
        if self.min_mentions == 0 {
            return Err(ConfigError::InvalidValue {
                key: "min_mentions".to_string(),
                value: "0 (must be at least 1)".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.column, 2);
        assert_eq!(config.min_mentions, 1);
        assert!(!config.ignore_case);
        assert_eq!(config.preview_rows, 5);
    }

    #[test]
    fn parse_var_rejects_garbage() {
        assert!(parse_var::<usize>("CASTLIST_COLUMN", "two").is_err());
        assert_eq!(parse_var::<usize>("CASTLIST_COLUMN", "3").unwrap(), 3);
        assert!(parse_var::<bool>("CASTLIST_IGNORE_CASE", "true").unwrap());
    }

    #[test]
    fn toml_config_parses_partial_files() {
        let config: AppConfig = toml::from_str("column = 3\nignore_case = true\n").unwrap();
        assert_eq!(config.column, 3);
        assert!(config.ignore_case);
        // Unset keys fall back to defaults.
        assert_eq!(config.min_mentions, 1);
    }

    #[test]
    fn zero_column_is_rejected() {
        let config: AppConfig = toml::from_str("column = 0\n").unwrap();
        assert!(config.validate().is_err());
    }
}
