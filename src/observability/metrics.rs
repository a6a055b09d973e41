//! Session counters for minisql
//!
//! - Counters only, monotonic
//! - Reset only on process start
//! - Thread-safe, lock-free

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters for one session
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Successful query count
    queries_executed: AtomicU64,
    /// Queries rejected before execution (parse errors, table mismatch)
    queries_rejected: AtomicU64,
    /// Queries that failed during execution
    queries_failed: AtomicU64,
    /// Total rows returned by successful queries
    rows_returned: AtomicU64,
    /// Successful LOAD count
    tables_loaded: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful query returning `rows` rows
    pub fn record_executed(&self, rows: u64) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
        self.rows_returned.fetch_add(rows, Ordering::Relaxed);
    }

    /// Increment rejected queries
    pub fn increment_rejected(&self) {
        self.queries_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment failed queries
    pub fn increment_failed(&self) {
        self.queries_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment loaded tables
    pub fn increment_tables_loaded(&self) {
        self.tables_loaded.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time copy of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            queries_executed: self.queries_executed.load(Ordering::Relaxed),
            queries_rejected: self.queries_rejected.load(Ordering::Relaxed),
            queries_failed: self.queries_failed.load(Ordering::Relaxed),
            rows_returned: self.rows_returned.load(Ordering::Relaxed),
            tables_loaded: self.tables_loaded.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub queries_executed: u64,
    pub queries_rejected: u64,
    pub queries_failed: u64,
    pub rows_returned: u64,
    pub tables_loaded: u64,
}

impl MetricsSnapshot {
    /// All queries seen, successful or not
    pub fn queries_total(&self) -> u64 {
        self.queries_executed + self.queries_rejected + self.queries_failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_new_registry_has_zero_values() {
        let snapshot = MetricsRegistry::new().snapshot();
        assert_eq!(snapshot, MetricsSnapshot::default());
        assert_eq!(snapshot.queries_total(), 0);
    }

    #[test]
    fn test_record_counters() {
        let metrics = MetricsRegistry::new();
        metrics.record_executed(3);
        metrics.record_executed(2);
        metrics.increment_rejected();
        metrics.increment_failed();
        metrics.increment_tables_loaded();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.queries_executed, 2);
        assert_eq!(snapshot.rows_returned, 5);
        assert_eq!(snapshot.queries_rejected, 1);
        assert_eq!(snapshot.queries_failed, 1);
        assert_eq!(snapshot.tables_loaded, 1);
        assert_eq!(snapshot.queries_total(), 4);
    }

    #[test]
    fn test_thread_safety() {
        let metrics = Arc::new(MetricsRegistry::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let m = Arc::clone(&metrics);
                thread::spawn(move || {
                    for _ in 0..100 {
                        m.record_executed(1);
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(metrics.snapshot().queries_executed, 400);
    }

    #[test]
    fn test_snapshot_serializes() {
        let metrics = MetricsRegistry::new();
        metrics.increment_tables_loaded();
        let json = serde_json::to_value(metrics.snapshot()).unwrap();
        assert_eq!(json["tables_loaded"], 1);
    }
}
