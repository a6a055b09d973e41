//! Executor error types
//!
//! Error codes:
//! - SQL_COLUMN_NOT_FOUND (ERROR)
//! - SQL_UNSUPPORTED_AGGREGATE (ERROR)
//! - SQL_UNKNOWN_OPERATOR (ERROR)
//! - SQL_COERCION_FAILED (ERROR)
//! - SQL_INCOMPARABLE_VALUES (ERROR)

use std::fmt;

use crate::value::{CoercionError, UnknownOperator, Value};

/// Severity levels for executor errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Query aborted, dataset untouched
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Executor-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionErrorCode {
    /// Referenced column is not in the row
    SqlColumnNotFound,
    /// Aggregate function other than COUNT
    SqlUnsupportedAggregate,
    /// Operator outside the supported set
    SqlUnknownOperator,
    /// Cell could not be coerced to the literal's kind
    SqlCoercionFailed,
    /// Coerced values have no ordering
    SqlIncomparableValues,
}

impl ExecutionErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            ExecutionErrorCode::SqlColumnNotFound => "SQL_COLUMN_NOT_FOUND",
            ExecutionErrorCode::SqlUnsupportedAggregate => "SQL_UNSUPPORTED_AGGREGATE",
            ExecutionErrorCode::SqlUnknownOperator => "SQL_UNKNOWN_OPERATOR",
            ExecutionErrorCode::SqlCoercionFailed => "SQL_COERCION_FAILED",
            ExecutionErrorCode::SqlIncomparableValues => "SQL_INCOMPARABLE_VALUES",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Error
    }
}

impl fmt::Display for ExecutionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Executor error type with full context
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionError {
    /// Error code
    code: ExecutionErrorCode,
    /// Human-readable message
    message: String,
    /// Column name if applicable
    column: Option<String>,
}

impl ExecutionError {
    /// Create a column not found error
    pub fn column_not_found(column: impl Into<String>) -> Self {
        let c = column.into();
        Self {
            code: ExecutionErrorCode::SqlColumnNotFound,
            message: format!("Column '{}' not found in table.", c),
            column: Some(c),
        }
    }

    /// Create an unsupported aggregate error
    pub fn unsupported_aggregate(function: impl Into<String>) -> Self {
        Self {
            code: ExecutionErrorCode::SqlUnsupportedAggregate,
            message: format!("Unsupported aggregate function: '{}'", function.into()),
            column: None,
        }
    }

    /// Create an unknown operator error
    pub fn unknown_operator(op: impl Into<String>) -> Self {
        Self::from(UnknownOperator(op.into()))
    }

    /// Create a coercion failure for a column/literal pair
    pub fn coercion_failed(column: impl Into<String>, literal: &Value, cause: CoercionError) -> Self {
        let c = column.into();
        Self {
            code: ExecutionErrorCode::SqlCoercionFailed,
            message: format!(
                "Cannot compare column '{}' with value '{}': {}",
                c, literal, cause
            ),
            column: Some(c),
        }
    }

    /// Create an incomparable values error
    pub fn incomparable(column: impl Into<String>, value: &Value, literal: &Value) -> Self {
        let c = column.into();
        Self {
            code: ExecutionErrorCode::SqlIncomparableValues,
            message: format!(
                "Cannot compare column '{}' value '{}' ({}) with '{}' ({})",
                c,
                value,
                value.kind(),
                literal,
                literal.kind()
            ),
            column: Some(c),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ExecutionErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the column name if applicable
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }
}

impl From<UnknownOperator> for ExecutionError {
    fn from(e: UnknownOperator) -> Self {
        Self {
            code: ExecutionErrorCode::SqlUnknownOperator,
            message: e.to_string(),
            column: None,
        }
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for ExecutionError {}

/// Result type for executor operations
pub type ExecutorResult<T> = Result<T, ExecutionError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ExecutionErrorCode::SqlColumnNotFound.code(),
            "SQL_COLUMN_NOT_FOUND"
        );
        assert_eq!(
            ExecutionErrorCode::SqlUnsupportedAggregate.code(),
            "SQL_UNSUPPORTED_AGGREGATE"
        );
        assert_eq!(
            ExecutionErrorCode::SqlUnknownOperator.code(),
            "SQL_UNKNOWN_OPERATOR"
        );
        assert_eq!(
            ExecutionErrorCode::SqlCoercionFailed.code(),
            "SQL_COERCION_FAILED"
        );
    }

    #[test]
    fn test_column_not_found_names_column() {
        let err = ExecutionError::column_not_found("nope");
        assert_eq!(err.column(), Some("nope"));
        assert_eq!(err.message(), "Column 'nope' not found in table.");
    }

    #[test]
    fn test_coercion_message() {
        let err = ExecutionError::coercion_failed(
            "age",
            &Value::Integer(30),
            CoercionError::new("thirty", ValueKind::Integer),
        );
        assert_eq!(
            err.message(),
            "Cannot compare column 'age' with value '30': Cannot convert 'thirty' to number"
        );
    }

    #[test]
    fn test_unknown_operator() {
        let err = ExecutionError::unknown_operator("<=>");
        assert_eq!(err.code(), ExecutionErrorCode::SqlUnknownOperator);
        assert!(err.to_string().contains("'<=>'"));
    }

    #[test]
    fn test_error_display() {
        let err = ExecutionError::unsupported_aggregate("SUM");
        let display = format!("{}", err);
        assert!(display.starts_with("[ERROR] SQL_UNSUPPORTED_AGGREGATE"));
        assert!(display.contains("SUM"));
    }
}
