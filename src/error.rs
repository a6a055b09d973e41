//! # Query Errors
//!
//! Union of the two ways a query can fail, for callers that parse and
//! execute in one step.

use thiserror::Error;

use crate::executor::ExecutionError;
use crate::parser::ParseError;

/// Result type for `run_query`
pub type QueryResult<T> = Result<T, QueryError>;

/// Parse or execution failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("Parse Error: {}", .0.message())]
    Parse(#[from] ParseError),

    #[error("Execution Error: {}", .0.message())]
    Execution(#[from] ExecutionError),
}

impl QueryError {
    /// Stable code of the underlying error
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::Parse(e) => e.code().code(),
            QueryError::Execution(e) => e.code().code(),
        }
    }

    /// Message of the underlying error
    pub fn message(&self) -> &str {
        match self {
            QueryError::Parse(e) => e.message(),
            QueryError::Execution(e) => e.message(),
        }
    }

    /// Returns true if the query text itself was rejected
    pub fn is_parse(&self) -> bool {
        matches!(self, QueryError::Parse(_))
    }
}
