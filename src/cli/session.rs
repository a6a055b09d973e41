//! Interactive session
//!
//! Holds at most one loaded table and dispatches input lines:
//! - LOAD <path>     load a CSV file, replacing the current table
//! - TABLES          describe the loaded table
//! - STATS           session counters
//! - HELP            usage
//! - EXIT / QUIT     end the session
//! - anything else   a SQL query
//!
//! Command words are case-insensitive. The table-name check for FROM lives
//! here, not in the query engine.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::error::QueryError;
use crate::executor::{QueryExecutor, ResultSet};
use crate::loader::{CsvLoader, LoadResult, Table};
use crate::observability::{log_event_with_fields, Event, MetricsRegistry, Timer};
use crate::parser::QueryParser;

use super::config::Config;
use super::errors::{CliResult, SessionError};
use super::render::write_result;

const BANNER: &str = "\
==================================================================
      Welcome to minisql

  Type 'HELP' for available commands or 'LOAD <file>' to start
==================================================================
";

const HELP: &str = "\
COMMANDS:
  LOAD <filepath>   - Load a CSV file
  TABLES            - Show the loaded table
  STATS             - Show session statistics
  EXIT or QUIT      - Exit
  HELP              - Show this help message

SQL SYNTAX (keywords are case-insensitive):
  SELECT col1, col2, ... | * | COUNT(*) | COUNT(col) FROM table_name [WHERE condition]

WHERE OPERATORS:
  =  !=  >  <  >=  <=

VALUE FORMATS:
  String: single quotes, e.g. 'USA'
  Number: unquoted, e.g. 30 or 2.5
";

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// One user session over at most one table
pub struct Session {
    config: Config,
    table: Option<Table>,
    parser: QueryParser,
    executor: QueryExecutor,
    metrics: MetricsRegistry,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            table: None,
            parser: QueryParser::new(),
            executor: QueryExecutor::new(),
            metrics: MetricsRegistry::new(),
        }
    }

    /// Currently loaded table
    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    /// Session counters
    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// Loads a CSV file, replacing the current table on success.
    ///
    /// On failure the previous table stays loaded.
    pub fn load(&mut self, path: impl AsRef<Path>) -> LoadResult<&Table> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        match CsvLoader::load(path) {
            Ok(table) => {
                let rows = table.len().to_string();
                log_event_with_fields(
                    Event::TableLoaded,
                    &[
                        ("path", path_str.as_str()),
                        ("table", table.name()),
                        ("rows", rows.as_str()),
                    ],
                );
                self.metrics.increment_tables_loaded();
                Ok(&*self.table.insert(table))
            }
            Err(e) => {
                let reason = e.to_string();
                log_event_with_fields(
                    Event::TableLoadFailed,
                    &[
                        ("path", path_str.as_str()),
                        ("code", e.code()),
                        ("reason", reason.as_str()),
                    ],
                );
                Err(e)
            }
        }
    }

    /// Parses and executes one query against the loaded table
    pub fn query(&self, text: &str) -> Result<ResultSet, SessionError> {
        let table = self.table.as_ref().ok_or(SessionError::NoTable)?;
        let timer = Timer::new();

        let query = match self.parser.parse(text) {
            Ok(q) => q,
            Err(e) => {
                log_event_with_fields(
                    Event::QueryRejected,
                    &[("query", text), ("code", e.code().code())],
                );
                self.metrics.increment_rejected();
                return Err(QueryError::from(e).into());
            }
        };
        log_event_with_fields(Event::QueryParsed, &[("table", query.table.as_str())]);

        if self.config.strict_table_name && query.table != table.name() {
            log_event_with_fields(
                Event::TableMismatch,
                &[("requested", query.table.as_str()), ("loaded", table.name())],
            );
            self.metrics.increment_rejected();
            return Err(SessionError::TableMismatch {
                requested: query.table,
                loaded: table.name().to_string(),
            });
        }

        match self.executor.execute(table.rows(), &query) {
            Ok(result) => {
                let rows = result.len().to_string();
                let elapsed = timer.elapsed_us();
                log_event_with_fields(
                    Event::QueryExecuted,
                    &[("rows", rows.as_str()), ("elapsed_us", elapsed.as_str())],
                );
                self.metrics.record_executed(result.len() as u64);
                Ok(result)
            }
            Err(e) => {
                log_event_with_fields(
                    Event::QueryFailed,
                    &[("query", text), ("code", e.code().code())],
                );
                self.metrics.increment_failed();
                Err(QueryError::from(e).into())
            }
        }
    }

    /// Handles one input line, writing any output to `out`
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> CliResult<Control> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Control::Continue);
        }

        let mut parts = line.splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or_default().to_ascii_uppercase();
        let rest = parts.next().map(str::trim).unwrap_or_default();

        match command.as_str() {
            "EXIT" | "QUIT" => {
                writeln!(out, "\n[OK] Goodbye!\n")?;
                return Ok(Control::Exit);
            }
            "HELP" => writeln!(out, "{}", HELP)?,
            "LOAD" if rest.is_empty() => {
                writeln!(out, "\n[ERROR] LOAD command requires a file path.\n")?
            }
            "LOAD" => self.load_and_report(rest, out)?,
            "TABLES" => self.describe_table(out)?,
            "STATS" => {
                let stats = self.metrics.snapshot();
                writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
            }
            _ => self.query_and_report(line, out)?,
        }

        out.flush()?;
        Ok(Control::Continue)
    }

    /// Loads a file and writes a short summary or the load error
    pub fn load_and_report<W: Write>(&mut self, path: &str, out: &mut W) -> CliResult<()> {
        match self.load(path) {
            Ok(table) => {
                writeln!(out, "\n[OK] Successfully loaded '{}'", path)?;
                writeln!(out, "  Table name: {}", table.name())?;
                writeln!(out, "  Rows: {}", table.len())?;
                writeln!(out, "  Columns: {}\n", table.columns().join(", "))?;
            }
            Err(e) => writeln!(out, "\n[ERROR] Error loading file: {}\n", e)?,
        }
        Ok(())
    }

    fn describe_table<W: Write>(&self, out: &mut W) -> CliResult<()> {
        match &self.table {
            Some(table) => writeln!(
                out,
                "{} ({} rows): {}",
                table.name(),
                table.len(),
                table.columns().join(", ")
            )?,
            None => writeln!(out, "(No table loaded)")?,
        }
        Ok(())
    }

    fn query_and_report<W: Write>(&self, text: &str, out: &mut W) -> CliResult<()> {
        match self.query(text) {
            Ok(result) => {
                writeln!(out)?;
                write_result(
                    out,
                    &result,
                    self.config.output_format,
                    self.config.max_display_rows,
                )?;
                writeln!(out)?;
            }
            Err(e) => writeln!(out, "\n[ERROR] {}\n", e)?,
        }
        Ok(())
    }

    /// Executes a single query, writing the result or failing
    pub fn run_once<W: Write>(&self, text: &str, out: &mut W) -> CliResult<()> {
        let result = self.query(text)?;
        write_result(
            out,
            &result,
            self.config.output_format,
            self.config.max_display_rows,
        )
    }

    /// Runs the read-eval loop until EXIT or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> CliResult<()> {
        log_event_with_fields(Event::SessionStart, &[]);
        write!(out, "{}", BANNER)?;

        let mut lines = input.lines();
        loop {
            write!(out, "{}", self.config.prompt)?;
            out.flush()?;

            let line = match lines.next() {
                Some(Ok(line)) => line,
                // The bad line is already consumed; the next read starts after it
                Some(Err(e)) if e.kind() == io::ErrorKind::InvalidData => {
                    writeln!(out, "\n[ERROR] Could not read input line: {}\n", e)?;
                    continue;
                }
                Some(Err(e)) => return Err(e.into()),
                None => {
                    writeln!(out)?;
                    break;
                }
            };

            if self.handle_line(&line, out)? == Control::Exit {
                break;
            }
        }

        let total = self.metrics.snapshot().queries_total().to_string();
        log_event_with_fields(Event::SessionEnd, &[("queries", total.as_str())]);
        Ok(())
    }
}
