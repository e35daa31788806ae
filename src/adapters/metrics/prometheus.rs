//! Prometheus Metrics Registry - Adapter Observability
//!
//! Registers fetch outcomes, subgraph latency and the most recent daily
//! totals per chain. The host process scrapes the text exposition via
//! [`AdapterMetrics::encode`].

use std::time::Duration;

use alloy::primitives::U256;
use prometheus::{
    Encoder, GaugeVec, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};

use crate::domain::Chain;

/// Outcome label values for `lyra_fees_adapter_fetches_total`.
pub const OUTCOME_OK: &str = "ok";
pub const OUTCOME_UPSTREAM_ERROR: &str = "upstream_error";
pub const OUTCOME_UNSUPPORTED_CHAIN: &str = "unsupported_chain";
pub const OUTCOME_INVALID_TIMESTAMP: &str = "invalid_timestamp";

/// Centralized Prometheus metrics for the fee adapter.
///
/// All metrics follow the naming convention `lyra_fees_adapter_*` and
/// carry a `chain` label.
pub struct AdapterMetrics {
    /// Prometheus registry.
    registry: Registry,
    /// Fetch calls by chain and outcome.
    pub fetches: IntCounterVec,
    /// Subgraph query latency (seconds), including retries.
    pub query_latency_seconds: HistogramVec,
    /// Snapshot count of the last successful fetch.
    pub last_snapshot_count: GaugeVec,
    /// Daily fees (whole tokens) of the last successful fetch.
    pub last_daily_fees: GaugeVec,
}

impl AdapterMetrics {
    /// Create and register all Prometheus metrics.
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let fetches = IntCounterVec::new(
            Opts::new(
                "lyra_fees_adapter_fetches_total",
                "Daily fee fetches by outcome",
            ),
            &["chain", "outcome"],
        )?;

        let query_latency_seconds = HistogramVec::new(
            HistogramOpts::new(
                "lyra_fees_adapter_query_latency_seconds",
                "Subgraph query latency in seconds",
            )
            .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
            &["chain"],
        )?;

        let last_snapshot_count = GaugeVec::new(
            Opts::new(
                "lyra_fees_adapter_last_snapshot_count",
                "Snapshots aggregated by the last successful fetch",
            ),
            &["chain"],
        )?;

        let last_daily_fees = GaugeVec::new(
            Opts::new(
                "lyra_fees_adapter_last_daily_fees",
                "Daily fees reported by the last successful fetch",
            ),
            &["chain"],
        )?;

        // Register all metrics
        registry.register(Box::new(fetches.clone()))?;
        registry.register(Box::new(query_latency_seconds.clone()))?;
        registry.register(Box::new(last_snapshot_count.clone()))?;
        registry.register(Box::new(last_daily_fees.clone()))?;

        Ok(Self {
            registry,
            fetches,
            query_latency_seconds,
            last_snapshot_count,
            last_daily_fees,
        })
    }

    /// Record the latency of one subgraph query, successful or not.
    pub fn observe_query(&self, chain: Chain, elapsed: Duration) {
        self.query_latency_seconds
            .with_label_values(&[chain.as_str()])
            .observe(elapsed.as_secs_f64());
    }

    /// Record a successful fetch.
    pub fn record_success(&self, chain: Chain, snapshots: usize, daily_fees: U256) {
        let label = chain.as_str();
        self.fetches.with_label_values(&[label, OUTCOME_OK]).inc();
        self.last_snapshot_count
            .with_label_values(&[label])
            .set(snapshots as f64);
        // f64 gauge: very large totals lose precision.
        let fees = daily_fees.to_string().parse::<f64>().unwrap_or(f64::MAX);
        self.last_daily_fees.with_label_values(&[label]).set(fees);
    }

    /// Record a failed fetch under `outcome`.
    pub fn record_failure(&self, chain: Chain, outcome: &str) {
        self.fetches
            .with_label_values(&[chain.as_str(), outcome])
            .inc();
    }

    /// Render all metrics in the Prometheus text exposition format.
    pub fn encode(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
