//! Value-level error types
//!
//! These never reach the caller directly; the executor wraps them into
//! `ExecutionError` with the column and literal that were being compared.

use std::fmt;

use super::types::ValueKind;

/// A cell could not be converted to the kind of the comparison literal
#[derive(Debug, Clone, PartialEq)]
pub struct CoercionError {
    /// Text form of the cell that failed to convert
    value: String,
    /// Kind the cell was being converted to
    target: ValueKind,
}

impl CoercionError {
    pub fn new(value: impl Into<String>, target: ValueKind) -> Self {
        Self {
            value: value.into(),
            target,
        }
    }

    /// Returns the offending cell text
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the kind the cell was coerced towards
    pub fn target(&self) -> ValueKind {
        self.target
    }
}

impl fmt::Display for CoercionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.target.is_numeric() {
            write!(f, "Cannot convert '{}' to number", self.value)
        } else {
            write!(f, "Cannot convert '{}' to {}", self.value, self.target)
        }
    }
}

impl std::error::Error for CoercionError {}

/// An operator symbol outside `=, !=, >, <, >=, <=`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperator(pub String);

impl fmt::Display for UnknownOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown operator: '{}'", self.0)
    }
}

impl std::error::Error for UnknownOperator {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_message() {
        let err = CoercionError::new("abc", ValueKind::Integer);
        assert_eq!(err.to_string(), "Cannot convert 'abc' to number");
        assert_eq!(err.value(), "abc");
    }

    #[test]
    fn test_unknown_operator_message() {
        let err = UnknownOperator("<=>".into());
        assert_eq!(err.to_string(), "Unknown operator: '<=>'");
    }
}
