//! Query executor for minisql
//!
//! Consumes a parsed `Query` and a borrowed row sequence and produces a
//! `ResultSet`. The executor never re-parses text, never mutates its input
//! and holds no state between calls.
//!
//! # Execution Flow (strict order)
//!
//! 1. Filter rows with the WHERE predicate (if any)
//! 2. If the query aggregates, aggregate the filtered rows into one row
//! 3. Otherwise project the filtered rows onto the select list
//!
//! Aggregation and projection are mutually exclusive and never chained.
//! Any error aborts the whole query; no partial result is returned.

mod aggregator;
mod errors;
mod executor;
mod filters;
mod projector;
mod result;
mod row;

pub use aggregator::Aggregator;
pub use errors::{ExecutionError, ExecutionErrorCode, ExecutorResult};
pub use executor::{execute, QueryExecutor};
pub use filters::PredicateFilter;
pub use projector::Projector;
pub use result::ResultSet;
pub use row::Row;
