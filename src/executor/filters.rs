//! Predicate filtering for query execution
//!
//! Each cell is coerced to the literal's kind before comparison. A missing
//! column is an error, not a non-match.

use std::borrow::Borrow;

use crate::parser::Predicate;
use crate::value::{coerce, compare};

use super::errors::{ExecutionError, ExecutorResult};
use super::row::Row;

/// Evaluates a WHERE predicate against rows
pub struct PredicateFilter;

impl PredicateFilter {
    /// Keeps the rows that satisfy `predicate`, in input order.
    ///
    /// With no predicate every row is kept.
    pub fn filter<'a, R>(
        rows: &'a [R],
        predicate: Option<&Predicate>,
    ) -> ExecutorResult<Vec<&'a Row>>
    where
        R: Borrow<Row>,
    {
        let predicate = match predicate {
            Some(p) => p,
            None => return Ok(rows.iter().map(Borrow::<Row>::borrow).collect()),
        };

        let mut kept = Vec::new();
        for row in rows {
            let row: &Row = row.borrow();
            if Self::matches(row, predicate)? {
                kept.push(row);
            }
        }
        Ok(kept)
    }

    /// Checks a single row against the predicate
    pub fn matches(row: &Row, predicate: &Predicate) -> ExecutorResult<bool> {
        let cell = row
            .get(&predicate.column)
            .ok_or_else(|| ExecutionError::column_not_found(&predicate.column))?;

        let coerced = coerce(cell, &predicate.literal).map_err(|e| {
            ExecutionError::coercion_failed(&predicate.column, &predicate.literal, e)
        })?;

        compare(&coerced, predicate.op, &predicate.literal).ok_or_else(|| {
            ExecutionError::incomparable(&predicate.column, &coerced, &predicate.literal)
        })
    }
}
