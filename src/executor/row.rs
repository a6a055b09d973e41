//! Ordered row representation

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::value::Value;

/// One record: column name to value, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<(String, Value)>,
}

impl Row {
    /// Creates an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty row with room for `n` cells
    pub fn with_capacity(n: usize) -> Self {
        Self {
            cells: Vec::with_capacity(n),
        }
    }

    /// Sets a cell. An existing column keeps its position.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        let column = column.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(c, _)| *c == column) {
            Some((_, slot)) => *slot = value,
            None => self.cells.push((column, value)),
        }
    }

    /// Returns the value of a column
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.cells
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v)
    }

    /// Returns true if the column is present
    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    /// Column names in order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(c, _)| c.as_str())
    }

    /// Cells in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.cells.iter().map(|(c, v)| (c.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, value) in &self.cells {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_kept() {
        let row: Row = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut row: Row = [("a", "1"), ("b", "2")].into_iter().collect();
        row.insert("a", "9");
        assert_eq!(row.len(), 2);
        assert_eq!(row.get("a"), Some(&Value::text("9")));
        assert_eq!(row.columns().next(), Some("a"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let row: Row = [("Name", "Alice")].into_iter().collect();
        assert!(row.contains("Name"));
        assert!(!row.contains("name"));
    }

    #[test]
    fn test_serialize_keeps_order() {
        let mut row: Row = [("z", "last")].into_iter().collect();
        row.insert("a", 1);
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"z":"last","a":1}"#
        );
    }
}
