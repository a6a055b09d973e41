//! minisql CLI entry point
//!
//! Parses arguments, runs the session, prints fatal errors to stderr and
//! exits non-zero on failure. All logic lives in the `cli` module.

use minisql::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
