//! Lyra Daily Fee Adapter — Library Root
//!
//! Turns a Unix timestamp into Lyra's daily fee record by querying the
//! protocol subgraph. Re-exports all modules for integration tests and
//! benchmarks.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod usecases;

pub use domain::{Chain, DailyFeeSummary};
pub use error::{AdapterError, UpstreamFailure};
pub use usecases::{AdapterRegistry, DailyFeeAdapter};
