//! Column projection

use std::borrow::Borrow;

use crate::parser::SelectList;

use super::errors::{ExecutionError, ExecutorResult};
use super::row::Row;

/// Selects and reorders columns
pub struct Projector;

impl Projector {
    /// Projects every row onto the select list.
    ///
    /// `SelectList::All` returns each row as-is, with every column and the
    /// original column order. An explicit list builds rows holding exactly
    /// those columns in list order.
    pub fn project<R>(rows: &[R], select: &SelectList) -> ExecutorResult<Vec<Row>>
    where
        R: Borrow<Row>,
    {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let columns = match select {
            SelectList::All => {
                return Ok(rows
                    .iter()
                    .map(|row| Borrow::<Row>::borrow(row).clone())
                    .collect())
            }
            SelectList::Columns(columns) => columns,
        };

        rows.iter()
            .map(|row| Self::project_row(row.borrow(), columns))
            .collect()
    }

    fn project_row(row: &Row, columns: &[String]) -> ExecutorResult<Row> {
        let mut out = Row::with_capacity(columns.len());
        for column in columns {
            let value = row
                .get(column)
                .ok_or_else(|| ExecutionError::column_not_found(column))?;
            out.insert(column.as_str(), value.clone());
        }
        Ok(out)
    }
}
