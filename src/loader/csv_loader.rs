//! CSV file reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::executor::Row;
use crate::value::Value;

use super::errors::{LoadError, LoadResult};
use super::table::Table;

/// Loads CSV data into a `Table`
pub struct CsvLoader;

impl CsvLoader {
    /// Loads a `.csv` file. The table is named after the file stem.
    pub fn load(path: impl AsRef<Path>) -> LoadResult<Table> {
        let path = path.as_ref();
        let display = path.display().to_string();

        if !path.exists() {
            return Err(LoadError::NotFound(display));
        }

        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        if !is_csv {
            return Err(LoadError::NotCsv(display));
        }

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        Self::from_reader(name, File::open(path)?)
    }

    /// Loads CSV data from any reader.
    ///
    /// Records must all have the header's field count.
    pub fn from_reader<R: Read>(name: impl Into<String>, reader: R) -> LoadResult<Table> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        let headers: Vec<String> = rdr
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                // Spreadsheet exports often start with a byte order mark
                if i == 0 {
                    h.trim_start_matches('\u{feff}').to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();

        if headers.is_empty() {
            return Err(LoadError::NoHeader);
        }

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let mut row = Row::with_capacity(headers.len());
            for (column, cell) in headers.iter().zip(record.iter()) {
                row.insert(column.as_str(), Value::text(cell));
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(LoadError::NoRows);
        }

        let mut columns: Vec<String> = Vec::with_capacity(headers.len());
        for header in headers {
            if !columns.contains(&header) {
                columns.push(header);
            }
        }

        Ok(Table::new(name, columns, rows))
    }
}
