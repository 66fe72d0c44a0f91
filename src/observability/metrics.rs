//! Operation counters for a contact directory.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters for directory operations.
///
/// Clones share the same counters. A disabled tracker ignores every
/// `record_*` call and always reports zero.
#[derive(Debug, Clone)]
pub struct DirectoryMetrics {
    enabled: bool,
    adds_total: Arc<AtomicU64>,
    deletes_total: Arc<AtomicU64>,
    updates_total: Arc<AtomicU64>,
    rejections_total: Arc<AtomicU64>,
}

impl DirectoryMetrics {
    /// Create a new, enabled metrics tracker.
    pub fn new() -> Self {
        Self::with_enabled(true)
    }

    /// Create a tracker that ignores every update.
    pub fn disabled() -> Self {
        Self::with_enabled(false)
    }

    fn with_enabled(enabled: bool) -> Self {
        Self {
            enabled,
            adds_total: Arc::new(AtomicU64::new(0)),
            deletes_total: Arc::new(AtomicU64::new(0)),
            updates_total: Arc::new(AtomicU64::new(0)),
            rejections_total: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a successful add.
    pub fn record_add(&self) {
        self.bump(&self.adds_total);
    }

    /// Record a successful delete.
    pub fn record_delete(&self) {
        self.bump(&self.deletes_total);
    }

    /// Record a successful field update.
    pub fn record_update(&self) {
        self.bump(&self.updates_total);
    }

    /// Record an operation that failed without changing the directory.
    pub fn record_rejection(&self, operation: &str) {
        if self.enabled {
            self.rejections_total.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(operation = %operation, "Rejection counted");
        }
    }

    fn bump(&self, counter: &AtomicU64) {
        if self.enabled {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn adds_total(&self) -> u64 {
        self.adds_total.load(Ordering::Relaxed)
    }

    pub fn deletes_total(&self) -> u64 {
        self.deletes_total.load(Ordering::Relaxed)
    }

    pub fn updates_total(&self) -> u64 {
        self.updates_total.load(Ordering::Relaxed)
    }

    pub fn rejections_total(&self) -> u64 {
        self.rejections_total.load(Ordering::Relaxed)
    }

    /// Share of all recorded operations that were rejected (0.0 to 1.0).
    pub fn rejection_rate(&self) -> f64 {
        let rejected = self.rejections_total() as f64;
        let total = (self.adds_total()
            + self.deletes_total()
            + self.updates_total()
            + self.rejections_total()) as f64;

        if total == 0.0 {
            0.0
        } else {
            rejected / total
        }
    }

    /// Take a point-in-time copy of every counter.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            adds_total: self.adds_total(),
            deletes_total: self.deletes_total(),
            updates_total: self.updates_total(),
            rejections_total: self.rejections_total(),
            rejection_rate: self.rejection_rate(),
        }
    }
}

impl Default for DirectoryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub adds_total: u64,
    pub deletes_total: u64,
    pub updates_total: u64,
    pub rejections_total: u64,
    pub rejection_rate: f64,
}

impl fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Metrics Summary:\n\
             Adds: {}\n\
             Deletes: {}\n\
             Updates: {}\n\
             Rejections: {} ({:.2}% rejection rate)",
            self.adds_total,
            self.deletes_total,
            self.updates_total,
            self.rejections_total,
            self.rejection_rate * 100.0,
        )
    }
}
