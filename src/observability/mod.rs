//! Observability module for logging and metrics.
//!
//! Directory operations emit `tracing` events and update
//! [`DirectoryMetrics`] counters; [`init_tracing`] wires up a subscriber for
//! applications that do not install their own.

pub mod logging;
pub mod metrics;

pub use logging::init_tracing;
pub use metrics::{DirectoryMetrics, MetricsSummary};
