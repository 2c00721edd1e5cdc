//! # Command-Line Arguments
//!
//! Flags win over the environment configuration.

use clap::Parser;

use crate::config::{CliConfig, OutputFormat};

/// Validate Argentine CUIT/CUIL and DNI numbers.
///
/// Identifiers are read from the arguments, or one per line from stdin when
/// none are given. Exits 0 when every identifier is valid, 1 otherwise.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "ar-id-check", version, about)]
pub struct Cli {
    /// Identification type label (CUIT, CUIL, DNI, Passport, ...).
    #[arg(short = 't', long = "type", value_name = "LABEL")]
    pub type_label: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Identifiers to check.
    #[arg(value_name = "IDENTIFIER")]
    pub identifiers: Vec<String>,
}

/// Settings for one run after merging flags and configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub type_label: String,
    pub format: OutputFormat,
}

impl Cli {
    /// Merges the flags over `config`.
    pub fn settings(&self, config: &CliConfig) -> RunSettings {
        RunSettings {
            type_label: self
                .type_label
                .clone()
                .unwrap_or_else(|| config.default_type.clone()),
            format: self.format.unwrap_or(config.format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from([
            "ar-id-check",
            "--type",
            "DNI",
            "-f",
            "json",
            "12345678",
            "20-12345678-6",
        ])
        .unwrap();
        assert_eq!(cli.type_label.as_deref(), Some("DNI"));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.identifiers, vec!["12345678", "20-12345678-6"]);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["ar-id-check", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_settings_prefer_flags() {
        let config = CliConfig {
            default_type: "DNI".to_string(),
            format: OutputFormat::Json,
            log_filter: "warn".to_string(),
        };

        let cli = Cli::try_parse_from(["ar-id-check"]).unwrap();
        let settings = cli.settings(&config);
        assert_eq!(settings.type_label, "DNI");
        assert_eq!(settings.format, OutputFormat::Json);

        let cli = Cli::try_parse_from(["ar-id-check", "-t", "CUIL", "-f", "text"]).unwrap();
        let settings = cli.settings(&config);
        assert_eq!(settings.type_label, "CUIL");
        assert_eq!(settings.format, OutputFormat::Text);
    }
}
