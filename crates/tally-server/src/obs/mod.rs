//! Lightweight in-process metrics.
//!
//! Prometheus-compatible text rendering without an exporter crate. Values are
//! stored as atomics and served by the `/metrics` handler.

pub mod metrics;

pub use metrics::ServerMetrics;
