//! CLI argument definitions using clap
//!
//! - minisql [FILE]                     interactive session, FILE preloaded
//! - minisql FILE --query <SQL>         one query, then exit
//! - minisql --config <path> ...        settings from a JSON file

use clap::Parser;
use std::path::PathBuf;

use super::config::OutputFormat;

/// minisql - run SELECT queries against a CSV file
#[derive(Parser, Debug)]
#[command(name = "minisql")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// CSV file to load before reading commands
    pub file: Option<PathBuf>,

    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Execute a single query against FILE and exit
    #[arg(short, long, requires = "file")]
    pub query: Option<String>,

    /// Output format, overrides the configuration file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
