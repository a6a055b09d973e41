//! Parser error types
//!
//! Error codes:
//! - SQL_EMPTY_QUERY (REJECT)
//! - SQL_INVALID_SYNTAX (REJECT)
//! - SQL_INVALID_COLUMN_NAME (REJECT)
//! - SQL_INVALID_WHERE (REJECT)
//! - SQL_INVALID_VALUE (REJECT)
//!
//! Parse errors are always raised before any row is touched.

use std::fmt;

/// Severity levels for parse errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Query text rejected
    Reject,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
        }
    }
}

/// Parser error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorCode {
    /// Blank query text
    SqlEmptyQuery,
    /// Text does not have the SELECT ... FROM ... [WHERE ...] shape
    SqlInvalidSyntax,
    /// Select list token is not an identifier
    SqlInvalidColumnName,
    /// WHERE segment is not `column operator literal`
    SqlInvalidWhere,
    /// Literal is neither quoted text nor a number
    SqlInvalidValue,
}

impl ParseErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            ParseErrorCode::SqlEmptyQuery => "SQL_EMPTY_QUERY",
            ParseErrorCode::SqlInvalidSyntax => "SQL_INVALID_SYNTAX",
            ParseErrorCode::SqlInvalidColumnName => "SQL_INVALID_COLUMN_NAME",
            ParseErrorCode::SqlInvalidWhere => "SQL_INVALID_WHERE",
            ParseErrorCode::SqlInvalidValue => "SQL_INVALID_VALUE",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Reject
    }
}

impl fmt::Display for ParseErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Parse error with full context
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Error code
    code: ParseErrorCode,
    /// Human-readable message
    message: String,
    /// Offending text fragment if applicable
    token: Option<String>,
}

impl ParseError {
    /// Create an empty query error
    pub fn empty_query() -> Self {
        Self {
            code: ParseErrorCode::SqlEmptyQuery,
            message: "Empty query provided.".into(),
            token: None,
        }
    }

    /// Create an invalid syntax error
    pub fn invalid_syntax() -> Self {
        Self {
            code: ParseErrorCode::SqlInvalidSyntax,
            message: "Invalid SQL syntax. Expected: SELECT column(s) FROM table [WHERE condition]"
                .into(),
            token: None,
        }
    }

    /// Create an invalid column name error
    pub fn invalid_column_name(token: impl Into<String>) -> Self {
        let t = token.into();
        Self {
            code: ParseErrorCode::SqlInvalidColumnName,
            message: format!("Invalid column name: '{}'", t),
            token: Some(t),
        }
    }

    /// Create an invalid WHERE clause error
    pub fn invalid_where(clause: impl Into<String>) -> Self {
        Self {
            code: ParseErrorCode::SqlInvalidWhere,
            message: "Invalid WHERE clause syntax. Expected: column operator value".into(),
            token: Some(clause.into()),
        }
    }

    /// Create an invalid literal error
    pub fn invalid_value(text: impl Into<String>) -> Self {
        let t = text.into();
        Self {
            code: ParseErrorCode::SqlInvalidValue,
            message: format!(
                "Invalid value: '{}'. Use single quotes for strings (e.g., 'USA') or unquoted numbers.",
                t
            ),
            token: Some(t),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ParseErrorCode {
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

    /// Returns the offending text fragment if applicable
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl fmt::Display for ParseError {
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

impl std::error::Error for ParseError {}

/// Result type for parser operations
pub type ParseResult<T> = Result<T, ParseError>;
