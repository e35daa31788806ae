//! Lyra Daily Fee Adapter — Runner
//!
//! Stand-in for the host aggregator: wires the adapter from config and
//! prints one day's fee record per configured chain as JSON lines.
//!
//! Usage:
//!   lyra-fees-adapter [TIMESTAMP]   fetch the UTC day containing TIMESTAMP (default: now)
//!   lyra-fees-adapter manifest      print the per-chain start/meta manifest
//!
//! Wiring sequence:
//! 1. Load config (`LYRA_FEES_CONFIG`, default `config.toml`, built-in defaults if absent)
//! 2. Init tracing (JSON structured logging)
//! 3. Create GraphqlClient (HTTP + timeout + retry + concurrency limit)
//! 4. Create DailyFeeAdapter over the endpoint table, with metrics
//! 5. Fetch every registry entry in turn and print the summaries

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, error, info};

use lyra_fees_adapter::adapters::graphql::{GraphqlClient, GraphqlClientConfig};
use lyra_fees_adapter::adapters::metrics::AdapterMetrics;
use lyra_fees_adapter::config;
use lyra_fees_adapter::usecases::{AdapterRegistry, DailyFeeAdapter};

const CONFIG_ENV: &str = "LYRA_FEES_CONFIG";

/// What the runner was asked to do.
enum Command {
  Fetch(i64),
  Manifest,
}

fn parse_command(arg: Option<String>) -> Result<Command> {
  match arg.as_deref() {
    None => Ok(Command::Fetch(Utc::now().timestamp())),
    Some("manifest") => Ok(Command::Manifest),
    Some(raw) => raw
      .parse::<i64>()
      .map(Command::Fetch)
      .with_context(|| format!("Expected a Unix timestamp or `manifest`, got `{raw}`")),
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  // ── 1. Load configuration ───────────────────────────────
  let config_path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| "config.toml".to_string());
  let config = config::loader::load_or_default(&config_path)
    .context("Failed to load configuration")?;

  // ── 2. Initialize structured JSON logging ───────────────
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.adapter.log_level)),
    )
    .with_writer(std::io::stderr)
    .json()
    .init();

  let command = parse_command(std::env::args().nth(1))?;

  info!(
    version = env!("CARGO_PKG_VERSION"),
    config = %config_path,
    "Starting Lyra daily fee adapter"
  );

  // ── 3. Create GraphQL client ────────────────────────────
  let client = Arc::new(
    GraphqlClient::new(GraphqlClientConfig::from(&config.transport))
      .context("Failed to create GraphQL client")?,
  );

  // ── 4. Create adapter + registry ────────────────────────
  let endpoints = config
    .endpoint_table()
    .context("Invalid endpoint table")?;
  let mut adapter = DailyFeeAdapter::new(client, endpoints);

  let metrics = if config.adapter.metrics_enabled {
    let metrics = Arc::new(AdapterMetrics::new().context("Failed to register metrics")?);
    adapter = adapter.with_metrics(Arc::clone(&metrics));
    Some(metrics)
  } else {
    None
  };

  let registry = AdapterRegistry::new(adapter);

  // ── 5. Run ──────────────────────────────────────────────
  let timestamp = match command {
    Command::Manifest => {
      println!("{}", serde_json::to_string_pretty(&registry.manifest())?);
      return Ok(());
    }
    Command::Fetch(timestamp) => timestamp,
  };

  let mut failed = 0usize;
  for entry in registry.entries() {
    match entry.fetch(timestamp).await {
      Ok(summary) => println!("{}", serde_json::to_string(&summary)?),
      Err(e) => {
        error!(chain = %entry.chain(), error = %e, "Fetch failed");
        failed += 1;
      }
    }
  }

  if let Some(metrics) = metrics {
    debug!(exposition = %metrics.encode()?, "Adapter metrics");
  }

  anyhow::ensure!(failed == 0, "{failed} of {} chain(s) failed", registry.len());
  info!(chains = registry.len(), "Done");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_timestamp_argument() {
    assert!(matches!(
      parse_command(Some("1656161234".into())).unwrap(),
      Command::Fetch(1_656_161_234)
    ));
  }

  #[test]
  fn test_parse_manifest_argument() {
    assert!(matches!(
      parse_command(Some("manifest".into())).unwrap(),
      Command::Manifest
    ));
  }

  #[test]
  fn test_parse_rejects_garbage() {
    assert!(parse_command(Some("yesterday".into())).is_err());
  }
}
