//! # Load Errors

use thiserror::Error;

/// Result type for load operations
pub type LoadResult<T> = Result<T, LoadError>;

/// CSV load errors
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File '{0}' not found.")]
    NotFound(String),

    #[error("File '{0}' is not a CSV file.")]
    NotCsv(String),

    #[error("CSV file is empty or has no header row.")]
    NoHeader,

    #[error("CSV file has no data rows.")]
    NoRows,

    #[error("Error reading CSV file: {0}")]
    Malformed(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    /// Returns a stable code for logging
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::NotFound(_) => "LOAD_NOT_FOUND",
            LoadError::NotCsv(_) => "LOAD_NOT_CSV",
            LoadError::NoHeader => "LOAD_NO_HEADER",
            LoadError::NoRows => "LOAD_NO_ROWS",
            LoadError::Malformed(_) => "LOAD_MALFORMED",
            LoadError::Io(_) => "LOAD_IO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            LoadError::NotFound("x.csv".into()).to_string(),
            "File 'x.csv' not found."
        );
        assert_eq!(
            LoadError::NoRows.to_string(),
            "CSV file has no data rows."
        );
    }

    #[test]
    fn test_codes() {
        assert_eq!(LoadError::NoHeader.code(), "LOAD_NO_HEADER");
        assert_eq!(LoadError::NotCsv("a.txt".into()).code(), "LOAD_NOT_CSV");
    }
}
