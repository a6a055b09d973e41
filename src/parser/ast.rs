//! Parsed query structures
//!
//! A `Query` is built once per query string and never mutated afterwards.

use std::fmt;
use std::str::FromStr;

use crate::executor::ExecutionError;
use crate::value::{CompareOp, Value};

/// Columns requested by the select list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectList {
    /// `SELECT *`: every column, in row order
    All,
    /// Explicit column names, in requested order
    Columns(Vec<String>),
}

impl SelectList {
    /// Build an explicit column list
    pub fn columns<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SelectList::Columns(names.into_iter().map(Into::into).collect())
    }

    /// Returns true for `SELECT *`
    pub fn is_all(&self) -> bool {
        matches!(self, SelectList::All)
    }
}

/// Aggregate functions understood by the executor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    Count,
}

impl AggregateFunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateFunction::Count => "COUNT",
        }
    }
}

impl FromStr for AggregateFunction {
    type Err = ExecutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("COUNT") {
            Ok(AggregateFunction::Count)
        } else {
            Err(ExecutionError::unsupported_aggregate(s))
        }
    }
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What an aggregate runs over
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregateTarget {
    /// `*`: every row counts
    AllRows,
    /// A named column: only non-empty values count
    Column(String),
}

/// Aggregate request from the select list, e.g. `COUNT(*)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateSpec {
    pub function: AggregateFunction,
    pub target: AggregateTarget,
}

impl AggregateSpec {
    /// `COUNT(*)`
    pub fn count_all() -> Self {
        Self {
            function: AggregateFunction::Count,
            target: AggregateTarget::AllRows,
        }
    }

    /// `COUNT(column)`
    pub fn count_column(column: impl Into<String>) -> Self {
        Self {
            function: AggregateFunction::Count,
            target: AggregateTarget::Column(column.into()),
        }
    }

    /// Output column label, e.g. `COUNT(*)` or `COUNT(name)`
    pub fn label(&self) -> String {
        match &self.target {
            AggregateTarget::AllRows => format!("{}(*)", self.function),
            AggregateTarget::Column(c) => format!("{}({})", self.function, c),
        }
    }
}

/// The single `column operator literal` condition of a WHERE clause
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    /// Column name, case-sensitive
    pub column: String,
    /// Comparison operator
    pub op: CompareOp,
    /// Parsed literal
    pub literal: Value,
}

impl Predicate {
    /// Create a predicate from parts
    pub fn new(column: impl Into<String>, op: CompareOp, literal: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            op,
            literal: literal.into(),
        }
    }

    /// Create an equality predicate
    pub fn eq(column: impl Into<String>, literal: impl Into<Value>) -> Self {
        Self::new(column, CompareOp::Eq, literal)
    }

    /// Create a greater-than predicate
    pub fn gt(column: impl Into<String>, literal: impl Into<Value>) -> Self {
        Self::new(column, CompareOp::Gt, literal)
    }

    /// Create a less-than predicate
    pub fn lt(column: impl Into<String>, literal: impl Into<Value>) -> Self {
        Self::new(column, CompareOp::Lt, literal)
    }
}

/// Parsed query
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Select list. Always `All` when an aggregate is present.
    pub select: SelectList,
    /// Identifier after FROM
    pub table: String,
    /// Optional WHERE predicate
    pub predicate: Option<Predicate>,
    /// Optional aggregate; when present the select list does not shape output
    pub aggregate: Option<AggregateSpec>,
}

impl Query {
    /// Creates a `SELECT * FROM table` query
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            select: SelectList::All,
            table: table.into(),
            predicate: None,
            aggregate: None,
        }
    }

    /// Sets an explicit column list
    pub fn with_columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = SelectList::columns(names);
        self
    }

    /// Sets the WHERE predicate
    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Sets the aggregate and resets the select list
    pub fn with_aggregate(mut self, aggregate: AggregateSpec) -> Self {
        self.select = SelectList::All;
        self.aggregate = Some(aggregate);
        self
    }

    /// Returns true if this query aggregates instead of projecting
    pub fn is_aggregate(&self) -> bool {
        self.aggregate.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builder() {
        let query = Query::new("people")
            .with_columns(["name", "age"])
            .with_predicate(Predicate::gt("age", 30));

        assert_eq!(query.table, "people");
        assert_eq!(query.select, SelectList::columns(["name", "age"]));
        assert_eq!(query.predicate.unwrap().op, CompareOp::Gt);
        assert!(query.aggregate.is_none());
    }

    #[test]
    fn test_aggregate_resets_select() {
        let query = Query::new("people")
            .with_columns(["name"])
            .with_aggregate(AggregateSpec::count_all());

        assert!(query.select.is_all());
        assert!(query.is_aggregate());
    }

    #[test]
    fn test_aggregate_labels() {
        assert_eq!(AggregateSpec::count_all().label(), "COUNT(*)");
        assert_eq!(AggregateSpec::count_column("name").label(), "COUNT(name)");
    }

    #[test]
    fn test_aggregate_function_names() {
        assert_eq!(
            "count".parse::<AggregateFunction>().unwrap(),
            AggregateFunction::Count
        );
        assert!("SUM".parse::<AggregateFunction>().is_err());
    }
}
