//! Observable events for a minisql session
//!
//! Events are explicit and typed; each maps to one log line.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Session begins
    SessionStart,
    /// Session ends
    SessionEnd,
    /// Configuration loaded
    ConfigLoaded,

    // Tables
    /// CSV loaded into memory
    TableLoaded,
    /// CSV load failed
    TableLoadFailed,

    // Queries
    /// Query text parsed
    QueryParsed,
    /// Query executed successfully
    QueryExecuted,
    /// Query text rejected by the parser
    QueryRejected,
    /// Query failed during execution
    QueryFailed,
    /// FROM names a table other than the loaded one
    TableMismatch,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SessionStart => "SESSION_START",
            Event::SessionEnd => "SESSION_END",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::TableLoaded => "TABLE_LOADED",
            Event::TableLoadFailed => "TABLE_LOAD_FAILED",
            Event::QueryParsed => "QUERY_PARSED",
            Event::QueryExecuted => "QUERY_EXECUTED",
            Event::QueryRejected => "QUERY_REJECTED",
            Event::QueryFailed => "QUERY_FAILED",
            Event::TableMismatch => "TABLE_MISMATCH",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::QueryParsed => Severity::Trace,
            Event::QueryRejected | Event::TableMismatch => Severity::Warn,
            Event::TableLoadFailed | Event::QueryFailed => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::SessionStart.as_str(), "SESSION_START");
        assert_eq!(Event::QueryExecuted.to_string(), "QUERY_EXECUTED");
        assert_eq!(Event::TableMismatch.as_str(), "TABLE_MISMATCH");
    }

    #[test]
    fn test_failures_outrank_successes() {
        assert!(Event::QueryFailed.severity() > Event::QueryExecuted.severity());
        assert!(Event::QueryRejected.severity() > Event::QueryParsed.severity());
        assert_eq!(Event::TableLoadFailed.severity(), Severity::Error);
    }
}
