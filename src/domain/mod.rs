//! Domain layer - fee snapshots, aggregation and the daily record.
//!
//! Pure logic with no I/O (hexagonal architecture inner ring). Everything
//! here is deterministic and testable in isolation.

pub mod chain;
pub mod day;
pub mod methodology;
pub mod snapshot;
pub mod summary;

// Re-export core types for convenience
pub use chain::Chain;
pub use day::{start_of_utc_day, SECONDS_PER_DAY};
pub use methodology::{AdapterMeta, Methodology, LYRA_METHODOLOGY};
pub use snapshot::{aggregate_daily_fees, AmountError, FeeSnapshot, FEE_UNIT};
pub use summary::DailyFeeSummary;
