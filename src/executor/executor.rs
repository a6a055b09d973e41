//! Query executor for minisql
//!
//! Execution flow (strict order):
//! 1. Filter rows with the WHERE predicate
//! 2. Aggregate, if the query has an aggregate spec
//! 3. Otherwise project onto the select list

use crate::parser::Query;

use super::aggregator::Aggregator;
use super::errors::ExecutorResult;
use super::filters::PredicateFilter;
use super::projector::Projector;
use super::result::ResultSet;
use super::row::Row;

/// Stateless executor; rows and query are passed per call
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryExecutor;

impl QueryExecutor {
    /// Creates a new executor
    pub fn new() -> Self {
        Self
    }

    /// Executes a parsed query against `rows`.
    ///
    /// Same rows + same query = same result. The rows are only read.
    pub fn execute(&self, rows: &[Row], query: &Query) -> ExecutorResult<ResultSet> {
        // Step 1: Filter
        let filtered = PredicateFilter::filter(rows, query.predicate.as_ref())?;

        // Step 2: Aggregate into a single row
        if let Some(spec) = &query.aggregate {
            let row = Aggregator::aggregate(&filtered, spec)?;
            return Ok(ResultSet::new(vec![row]));
        }

        // Step 3: Project
        let projected = Projector::project(&filtered, &query.select)?;
        Ok(ResultSet::new(projected))
    }
}

/// Executes a parsed query with a default executor
pub fn execute(rows: &[Row], query: &Query) -> ExecutorResult<ResultSet> {
    QueryExecutor::new().execute(rows, query)
}
