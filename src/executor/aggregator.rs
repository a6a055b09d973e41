//! COUNT aggregation over filtered rows

use std::borrow::Borrow;

use crate::parser::{AggregateFunction, AggregateSpec, AggregateTarget};
use crate::value::Value;

use super::errors::{ExecutionError, ExecutorResult};
use super::row::Row;

/// Computes aggregate specs into a single output row
pub struct Aggregator;

impl Aggregator {
    /// Aggregates `rows` into one row keyed by the aggregate's label.
    ///
    /// `COUNT(*)` counts rows. `COUNT(col)` counts rows whose `col` is
    /// present and not the empty string. The column is only checked against
    /// the first row, so an empty input yields 0 for any column name.
    pub fn aggregate<R>(rows: &[R], spec: &AggregateSpec) -> ExecutorResult<Row>
    where
        R: Borrow<Row>,
    {
        let count = match spec.function {
            AggregateFunction::Count => Self::count(rows, &spec.target)?,
        };

        let mut row = Row::with_capacity(1);
        row.insert(spec.label(), Value::Integer(count as i64));
        Ok(row)
    }

    fn count<R>(rows: &[R], target: &AggregateTarget) -> ExecutorResult<usize>
    where
        R: Borrow<Row>,
    {
        let column = match target {
            AggregateTarget::AllRows => return Ok(rows.len()),
            AggregateTarget::Column(c) => c,
        };

        if let Some(first) = rows.first() {
            let first: &Row = first.borrow();
            if !first.contains(column) {
                return Err(ExecutionError::column_not_found(column));
            }
        }

        Ok(rows
            .iter()
            .filter(|row| {
                let row: &Row = (*row).borrow();
                row.get(column).is_some_and(|v| !v.is_empty_text())
            })
            .count())
    }
}
