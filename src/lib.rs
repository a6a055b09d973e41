//! minisql - a small SQL query engine over one in-memory table
//!
//! Supports `SELECT <cols>|*|COUNT(...) FROM <table> [WHERE <col> <op> <literal>]`
//! against rows loaded from a CSV file.
//!
//! ```ignore
//! let table = minisql::loader::CsvLoader::load("people.csv")?;
//! let result = minisql::run_query(table.rows(), "SELECT name FROM people WHERE age > 30")?;
//! ```

pub mod cli;
pub mod error;
pub mod executor;
pub mod loader;
pub mod observability;
pub mod parser;
pub mod value;

pub use error::{QueryError, QueryResult};
pub use executor::{ResultSet, Row};
pub use parser::Query;
pub use value::Value;

/// Parses `text` and executes it against `rows`.
///
/// Parse errors are returned before any row is read.
pub fn run_query(rows: &[Row], text: &str) -> QueryResult<ResultSet> {
    let query = parser::QueryParser::new().parse(text)?;
    Ok(executor::execute(rows, &query)?)
}
