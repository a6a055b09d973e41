//! Result rendering
//!
//! - Table: bordered grid, one header row, then `Rows returned: N`
//! - JSON: the result set as an array of objects, column order kept

use std::io::Write;

use crate::executor::ResultSet;

use super::config::OutputFormat;
use super::errors::CliResult;

/// Writes a result set in the requested format.
///
/// `max_rows` limits rendered rows only; 0 renders everything.
pub fn write_result<W: Write>(
    out: &mut W,
    result: &ResultSet,
    format: OutputFormat,
    max_rows: usize,
) -> CliResult<()> {
    match format {
        OutputFormat::Table => write_table(out, result, max_rows),
        OutputFormat::Json => write_json(out, result),
    }
}

/// Writes the result as a JSON array
pub fn write_json<W: Write>(out: &mut W, result: &ResultSet) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Writes the result as a bordered text grid
pub fn write_table<W: Write>(out: &mut W, result: &ResultSet, max_rows: usize) -> CliResult<()> {
    if result.is_empty() {
        writeln!(out, "(No results)")?;
        out.flush()?;
        return Ok(());
    }

    let columns = result.columns();
    let shown = if max_rows == 0 {
        result.len()
    } else {
        max_rows.min(result.len())
    };

    let cells: Vec<Vec<String>> = result
        .iter()
        .take(shown)
        .map(|row| {
            columns
                .iter()
                .map(|c| row.get(c).map(|v| v.to_string()).unwrap_or_default())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            cells
                .iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(c.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let border = border_line(&widths, '-');
    writeln!(out, "{}", border)?;
    writeln!(out, "{}", data_line(columns.iter().copied(), &widths))?;
    writeln!(out, "{}", border_line(&widths, '='))?;
    for row in &cells {
        writeln!(out, "{}", data_line(row.iter().map(String::as_str), &widths))?;
    }
    writeln!(out, "{}", border)?;

    if shown < result.len() {
        writeln!(out, "... ({} more rows not shown)", result.len() - shown)?;
    }
    writeln!(out, "Rows returned: {}", result.len())?;
    out.flush()?;
    Ok(())
}

fn border_line(widths: &[usize], fill: char) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.extend(std::iter::repeat(fill).take(w + 2));
        line.push('+');
    }
    line
}

fn data_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, w) in cells.zip(widths) {
        let pad = w - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.extend(std::iter::repeat(' ').take(pad + 1));
        line.push('|');
    }
    line
}
