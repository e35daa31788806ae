//! Subgraph Port - Fee Snapshot Query Interface
//!
//! Defines the trait the daily fee use case calls to pull one day's
//! fee snapshots from a chain's subgraph. Transport concerns (HTTP,
//! retries, timeouts, concurrency limits) stay behind this boundary.

use async_trait::async_trait;

use crate::domain::FeeSnapshot;
use crate::error::UpstreamFailure;

/// Trait for subgraph query providers.
///
/// Implementors issue the `marketVolumeAndFeesSnapshots` query for
/// one-day periods starting at `day_start` and return every record
/// the endpoint reports, in response order.
#[async_trait]
pub trait SubgraphClient: Send + Sync + 'static {
  /// Fetch all daily fee snapshots whose period starts at `day_start`.
  ///
  /// `day_start` must already be aligned to a UTC midnight.
  async fn daily_fee_snapshots(
    &self,
    endpoint: &str,
    day_start: i64,
  ) -> Result<Vec<FeeSnapshot>, UpstreamFailure>;
}
