//! CSV ingestion for minisql
//!
//! Loads one CSV file into a `Table`: a name taken from the file stem, the
//! header row as column names, and one `Row` per record with every cell
//! stored as text. Typing happens later, at comparison time.

mod csv_loader;
mod errors;
mod table;

pub use csv_loader::CsvLoader;
pub use errors::{LoadError, LoadResult};
pub use table::Table;
