//! Result types for query execution

use serde::{Serialize, Serializer};

use super::row::Row;

/// Ordered output rows of one query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    rows: Vec<Row>,
}

impl ResultSet {
    /// Creates a result set from rows
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Creates an empty result
    pub fn empty() -> Self {
        Self::default()
    }

    /// Output column names, taken from the first row
    pub fn columns(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|row| row.columns().collect())
            .unwrap_or_default()
    }

    /// Returns true if no rows matched
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns an iterator over the rows
    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Returns the rows as a slice
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consumes the result, returning its rows
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl IntoIterator for ResultSet {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = ResultSet::empty();
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert!(result.columns().is_empty());
    }

    #[test]
    fn test_columns_from_first_row() {
        let row: Row = [("name", "Alice"), ("age", "30")].into_iter().collect();
        let result = ResultSet::new(vec![row]);
        assert_eq!(result.columns(), vec!["name", "age"]);
    }

    #[test]
    fn test_serialize_as_array() {
        let row: Row = [("n", 2)].into_iter().collect();
        let result = ResultSet::new(vec![row]);
        assert_eq!(serde_json::to_string(&result).unwrap(), r#"[{"n":2}]"#);
    }
}
