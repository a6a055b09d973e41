//! Session configuration
//!
//! Loaded from an optional JSON file. Every field has a default, so `{}` is
//! a valid configuration.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::observability::Severity;

use super::errors::{CliError, CliResult};

/// How result sets are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bordered text grid
    Table,
    /// JSON array of objects
    Json,
}

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Interactive prompt
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Lowest log severity written to stderr
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Result rendering
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Rows rendered per result, 0 for no limit
    #[serde(default)]
    pub max_display_rows: usize,

    /// Reject queries whose FROM differs from the loaded table name
    #[serde(default = "default_strict_table_name")]
    pub strict_table_name: bool,
}

fn default_prompt() -> String {
    "> ".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}
fn default_strict_table_name() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            log_level: default_log_level(),
            output_format: default_output_format(),
            max_display_rows: 0,
            strict_table_name: default_strict_table_name(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.prompt.is_empty() {
            return Err(CliError::config_error("prompt must not be empty"));
        }

        self.log_severity()?;

        Ok(())
    }

    /// Parsed `log_level`
    pub fn log_severity(&self) -> CliResult<Severity> {
        self.log_level.parse::<Severity>().map_err(CliError::config_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.max_display_rows, 0);
        assert!(config.strict_table_name);
        assert_eq!(config.log_severity().unwrap(), Severity::Warn);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_json(
            r#"{"prompt":"sql> ","output_format":"json","max_display_rows":5,"strict_table_name":false,"log_level":"info"}"#,
        )
        .unwrap();
        assert_eq!(config.prompt, "sql> ");
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.max_display_rows, 5);
        assert!(!config.strict_table_name);
        assert_eq!(config.log_severity().unwrap(), Severity::Info);
    }

    #[test]
    fn test_invalid_log_level() {
        let err = Config::from_json(r#"{"log_level":"loud"}"#).unwrap_err();
        assert_eq!(err.code_str(), "MINISQL_CLI_CONFIG_ERROR");
        assert!(err.message().contains("loud"));
    }

    #[test]
    fn test_empty_prompt_rejected() {
        assert!(Config::from_json(r#"{"prompt":""}"#).is_err());
    }

    #[test]
    fn test_invalid_format_rejected() {
        assert!(Config::from_json(r#"{"output_format":"xml"}"#).is_err());
    }
}
