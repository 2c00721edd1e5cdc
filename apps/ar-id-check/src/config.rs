//! Checker configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! Command-line flags override these values (see [`crate::cli`]).

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Identification type used when `--type` is not given.
pub const DEFAULT_TYPE_LABEL: &str = "CUIT";

/// Log filter used when neither `AR_ID_CHECK_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// How verdicts are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One status line per identifier, messages indented below
    #[default]
    Text,

    /// One host-shaped JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("AR_ID_CHECK_FORMAT".to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Checker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Identification type label applied when none is passed
    pub default_type: String,

    /// Output format
    pub format: OutputFormat,

    /// tracing-subscriber filter directive
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            default_type: DEFAULT_TYPE_LABEL.to_string(),
            format: OutputFormat::Text,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_type = match lookup("AR_ID_CHECK_DEFAULT_TYPE") {
            Some(label) if label.trim().is_empty() => {
                return Err(ConfigError::InvalidValue(
                    "AR_ID_CHECK_DEFAULT_TYPE".to_string(),
                ))
            }
            Some(label) => label.trim().to_string(),
            None => DEFAULT_TYPE_LABEL.to_string(),
        };

        let format = match lookup("AR_ID_CHECK_FORMAT") {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        let log_filter = lookup("AR_ID_CHECK_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(CliConfig {
            default_type,
            format,
            log_filter,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
