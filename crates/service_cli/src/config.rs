//! CLI configuration management.
//!
//! Handles loading of `saccr.toml` with environment variable overrides.
//! Every key is optional:
//!
//! ```toml
//! log_level = "info"
//! data_dir = "data"
//! format = "table"
//!
//! [params.market]
//! volatility = 0.5
//!
//! [params.supervisory]
//! alpha = 1.4
//! ```

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use pricer_saccr::{SaCcrError, SaCcrParams};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawn tables
    #[default]
    Table,
    /// Pretty-printed JSON report
    Json,
    /// Comma-separated values
    Csv,
}

impl OutputFormat {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Directory searched for bare data set names
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Default report format
    #[serde(default)]
    pub format: OutputFormat,

    /// Market and supervisory parameters
    #[serde(default)]
    pub params: SaCcrParams,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            data_dir: default_data_dir(),
            format: OutputFormat::default(),
            params: SaCcrParams::default(),
        }
    }
}

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `SACCR_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(log_level) = lookup("SACCR_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(data_dir) = lookup("SACCR_DATA_DIR") {
            self.data_dir = PathBuf::from(data_dir);
        }

        if let Some(format) = lookup("SACCR_FORMAT") {
            self.format = OutputFormat::parse(&format).ok_or_else(|| {
                ConfigError::Validation(vec![format!(
                    "Invalid SACCR_FORMAT '{}'. Valid values: table, json, csv",
                    format
                )])
            })?;
        }

        Ok(self)
    }

    /// Validate the configuration, collecting every problem
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if self.data_dir.as_os_str().is_empty() {
            errors.push("data_dir cannot be empty".to_string());
        }

        match self.params.validate() {
            Ok(()) => {}
            Err(SaCcrError::InvalidParams(param_errors)) => errors.extend(param_errors),
            Err(other) => errors.push(other.to_string()),
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (if present) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let file = write_config(
            r#"
format = "json"

[params.market]
volatility = 0.3

[params.supervisory]
alpha = 1.2
"#,
        );
        let config = CliConfig::load(file.path()).unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.params.market.volatility, 0.3);
        assert_eq!(config.params.market.fixed_rate, 0.05);
        assert_eq!(config.params.supervisory.alpha, 1.2);
        assert_eq!(config.params.supervisory.pfe_floor, 60.0);
    }

    #[test]
    fn test_bundled_config_matches_defaults() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../saccr.toml");
        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let file = write_config("formt = \"json\"\n");
        assert!(matches!(
            CliConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saccr.toml");

        assert!(matches!(CliConfig::load(&path), Err(ConfigError::Io(_))));
        assert_eq!(
            CliConfig::load_or_default(&path).unwrap(),
            CliConfig::default()
        );
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("SACCR_LOG_LEVEL", "debug"),
            ("SACCR_DATA_DIR", "/srv/trades"),
            ("SACCR_FORMAT", "CSV"),
        ]
        .into_iter()
        .collect();

        let config = CliConfig::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.data_dir, PathBuf::from("/srv/trades"));
        assert_eq!(config.format, OutputFormat::Csv);
    }

    #[test]
    fn test_invalid_format_override() {
        let result = CliConfig::default().with_overrides(|key| {
            (key == "SACCR_FORMAT").then(|| "xml".to_string())
        });
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validate_collects_config_and_param_errors() {
        let mut config = CliConfig::default();
        config.log_level = "loud".to_string();
        config.data_dir = PathBuf::new();
        config.params.market.volatility = 0.0;
        config.params.supervisory.multiplier = 2.0;

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 4);
                assert!(errors[0].contains("log_level"));
                assert!(errors.iter().any(|e| e.contains("market.volatility")));
            }
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_params_round_trip_through_toml() {
        let config = CliConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: CliConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
