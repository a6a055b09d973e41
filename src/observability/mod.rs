//! Observability for minisql
//!
//! - Structured logging (JSON lines on stderr)
//! - Session counters
//! - Typed lifecycle and query events
//!
//! The query core (`value`, `parser`, `executor`) never logs. Events are
//! emitted by the session around each core call.
//!
//! # Usage
//!
//! ```ignore
//! use minisql::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::TableLoaded, &[("table", "people"), ("rows", "42")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.record_executed(42);
//! ```

mod events;
mod logger;
mod metrics;
mod timer;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use timer::Timer;

/// Log an event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log an event with fields at its own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
