//! Daily Fee Adapter - Timestamp to Daily Fee Record
//!
//! The single use case of the crate:
//! - Align the requested timestamp to its UTC day
//! - Query the chain's subgraph for that day's fee snapshots
//! - Sum the seven fee components and scale to whole tokens
//! - Emit the host's fixed-shape daily record
//!
//! Calls are independent. The adapter only holds immutable state and can
//! be shared behind an `Arc` across concurrent fetches.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, instrument};

use crate::adapters::metrics::prometheus::{
  OUTCOME_INVALID_TIMESTAMP, OUTCOME_UNSUPPORTED_CHAIN, OUTCOME_UPSTREAM_ERROR,
};
use crate::adapters::metrics::AdapterMetrics;
use crate::config::EndpointTable;
use crate::domain::day::{day_label, start_of_utc_day};
use crate::domain::{aggregate_daily_fees, AdapterMeta, Chain, DailyFeeSummary};
use crate::error::{AdapterError, Result};
use crate::ports::SubgraphClient;

/// Configured fee adapter for one protocol across its chains.
pub struct DailyFeeAdapter<C: SubgraphClient> {
  /// Subgraph query port.
  client: Arc<C>,
  /// Chain → endpoint mapping, fixed at construction.
  endpoints: EndpointTable,
  /// Optional metrics sink.
  metrics: Option<Arc<AdapterMetrics>>,
}

impl<C: SubgraphClient> DailyFeeAdapter<C> {
  /// Create an adapter over `client` serving the chains in `endpoints`.
  pub fn new(client: Arc<C>, endpoints: EndpointTable) -> Self {
    Self {
      client,
      endpoints,
      metrics: None,
    }
  }

  /// Record fetch outcomes and latency into `metrics`.
  pub fn with_metrics(mut self, metrics: Arc<AdapterMetrics>) -> Self {
    self.metrics = Some(metrics);
    self
  }

  /// Chains this adapter has endpoints for.
  pub fn chains(&self) -> impl Iterator<Item = Chain> + '_ {
    self.endpoints.chains()
  }

  /// Earliest timestamp with valid data on `chain`.
  pub fn start(&self, chain: Chain) -> i64 {
    chain.start_timestamp()
  }

  /// Static methodology metadata.
  pub fn meta(&self) -> AdapterMeta {
    AdapterMeta::default()
  }

  /// Compute the daily fee record for the UTC day containing `timestamp`.
  ///
  /// The returned record echoes `timestamp` unchanged; only the upstream
  /// query uses the day-aligned value.
  ///
  /// # Errors
  /// - [`AdapterError::UnsupportedChain`] if `chain` has no endpoint
  /// - [`AdapterError::InvalidTimestamp`] if the day start of `timestamp`
  ///   underflows `i64`
  /// - [`AdapterError::UpstreamQuery`] if the query fails or returns a
  ///   malformed fee amount
  #[instrument(skip(self))]
  pub async fn fetch(&self, chain: Chain, timestamp: i64) -> Result<DailyFeeSummary> {
    let Some(endpoint) = self.endpoints.get(chain) else {
      error!("No endpoint configured");
      self.record_failure(chain, OUTCOME_UNSUPPORTED_CHAIN);
      return Err(AdapterError::UnsupportedChain(chain));
    };

    let Some(day_start) = start_of_utc_day(timestamp) else {
      error!("Timestamp has no representable day start");
      self.record_failure(chain, OUTCOME_INVALID_TIMESTAMP);
      return Err(AdapterError::InvalidTimestamp(timestamp));
    };

    let started = Instant::now();
    let result = self.client.daily_fee_snapshots(endpoint, day_start).await;
    if let Some(metrics) = &self.metrics {
      metrics.observe_query(chain, started.elapsed());
    }

    let snapshots = result.map_err(|e| {
      error!(error = %e, day_start, "Failed to get total fees");
      self.record_failure(chain, OUTCOME_UPSTREAM_ERROR);
      AdapterError::upstream(chain, e)
    })?;

    let daily_fees = aggregate_daily_fees(&snapshots).map_err(|e| {
      error!(error = %e, day_start, "Malformed fee amount in subgraph response");
      self.record_failure(chain, OUTCOME_UPSTREAM_ERROR);
      AdapterError::upstream(chain, e)
    })?;

    if let Some(metrics) = &self.metrics {
      metrics.record_success(chain, snapshots.len(), daily_fees);
    }

    info!(
      day = %day_label(day_start),
      snapshots = snapshots.len(),
      daily_fees = %daily_fees,
      "Daily fees aggregated"
    );

    Ok(DailyFeeSummary::from_total(timestamp, daily_fees))
  }

  fn record_failure(&self, chain: Chain, outcome: &str) {
    if let Some(metrics) = &self.metrics {
      metrics.record_failure(chain, outcome);
    }
  }
}
