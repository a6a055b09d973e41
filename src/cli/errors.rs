//! CLI-specific error types
//!
//! `CliError` ends the process with a non-zero exit code. `SessionError` is
//! reported to the user and the session continues.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::error::QueryError;
use crate::loader::LoadError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout)
    IoError,
    /// CSV file could not be loaded
    LoadFailed,
    /// One-shot query failed
    QueryFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "MINISQL_CLI_CONFIG_ERROR",
            Self::IoError => "MINISQL_CLI_IO_ERROR",
            Self::LoadFailed => "MINISQL_CLI_LOAD_FAILED",
            Self::QueryFailed => "MINISQL_CLI_QUERY_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Load failed
    pub fn load_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::LoadFailed, msg)
    }

    /// Query failed
    pub fn query_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::QueryFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<LoadError> for CliError {
    fn from(e: LoadError) -> Self {
        Self::load_failed(e.to_string())
    }
}

impl From<SessionError> for CliError {
    fn from(e: SessionError) -> Self {
        Self::query_failed(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// Why a query typed into the session produced no result
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No table loaded. Use 'LOAD <filepath>' first.")]
    NoTable,

    #[error("Table '{requested}' not found. Currently loaded table: '{loaded}'")]
    TableMismatch { requested: String, loaded: String },

    #[error(transparent)]
    Query(#[from] QueryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseError;

    #[test]
    fn test_error_codes() {
        assert_eq!(CliError::config_error("x").code_str(), "MINISQL_CLI_CONFIG_ERROR");
        assert_eq!(CliError::io_error("x").code_str(), "MINISQL_CLI_IO_ERROR");
        assert_eq!(
            CliError::from(LoadError::NoRows).code(),
            &CliErrorCode::LoadFailed
        );
    }

    #[test]
    fn test_session_error_messages() {
        let err = SessionError::TableMismatch {
            requested: "orders".into(),
            loaded: "people".into(),
        };
        assert_eq!(
            err.to_string(),
            "Table 'orders' not found. Currently loaded table: 'people'"
        );

        let err = SessionError::from(QueryError::from(ParseError::empty_query()));
        assert_eq!(err.to_string(), "Parse Error: Empty query provided.");
    }

    #[test]
    fn test_display() {
        let err = CliError::query_failed("boom");
        assert_eq!(err.to_string(), "MINISQL_CLI_QUERY_FAILED: boom");
    }
}
