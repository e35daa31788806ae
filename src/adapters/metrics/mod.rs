//! Metrics Adapter
//!
//! Prometheus registry for fetch outcomes and subgraph latency. The
//! host embedding the adapter decides where the exposition is served.

pub mod prometheus;

pub use prometheus::AdapterMetrics;
