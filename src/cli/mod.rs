//! CLI module for minisql
//!
//! Provides:
//! - interactive session (LOAD, TABLES, STATS, HELP, EXIT, SQL)
//! - one-shot query execution (`--query`)
//! - table and JSON result rendering

mod args;
mod config;
mod errors;
mod render;
mod session;

use std::io;

use crate::observability::{log_event_with_fields, Event, Logger};

pub use args::Cli;
pub use config::{Config, OutputFormat};
pub use errors::{CliError, CliErrorCode, CliResult, SessionError};
pub use render::{write_json, write_result, write_table};
pub use session::{Control, Session};

/// Parses arguments and runs the requested mode
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let mut config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)?;
            Logger::set_min_severity(config.log_severity()?);
            let path = path.display().to_string();
            log_event_with_fields(Event::ConfigLoaded, &[("path", path.as_str())]);
            config
        }
        None => Config::default(),
    };
    if let Some(format) = cli.format {
        config.output_format = format;
    }

    let mut session = Session::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(text) = &cli.query {
        let file = cli
            .file
            .as_ref()
            .ok_or_else(|| CliError::load_failed("--query requires a CSV file"))?;
        session.load(file)?;
        return session.run_once(text, &mut out);
    }

    if let Some(file) = &cli.file {
        session.load_and_report(&file.display().to_string(), &mut out)?;
    }

    let stdin = io::stdin();
    session.run(stdin.lock(), &mut out)
}
