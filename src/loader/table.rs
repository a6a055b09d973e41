//! Loaded table

use crate::executor::Row;

/// One loaded dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows,
        }
    }

    /// Table identifier used in FROM
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Header columns in file order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows in file order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
