//! Configuration Module - TOML-based Adapter Configuration
//!
//! Loads and validates configuration from `config.toml`. Every field has
//! a default, so an absent file or section yields the public Lyra
//! subgraph with conservative transport settings.

pub mod endpoints;
pub mod loader;

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

pub use endpoints::EndpointTable;

/// Top-level adapter configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
  /// Adapter identity and logging.
  #[serde(default)]
  pub adapter: AdapterSection,
  /// HTTP transport settings for the GraphQL client.
  #[serde(default)]
  pub transport: TransportConfig,
  /// Chain identifier → subgraph URL overrides.
  #[serde(default)]
  pub endpoints: BTreeMap<String, String>,
}

impl AppConfig {
  /// Resolve the endpoint table, falling back to the built-in defaults
  /// when no `[endpoints]` are configured.
  pub fn endpoint_table(&self) -> anyhow::Result<EndpointTable> {
    if self.endpoints.is_empty() {
      Ok(EndpointTable::default())
    } else {
      EndpointTable::from_config(&self.endpoints)
    }
  }
}

/// Adapter identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AdapterSection {
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Record Prometheus metrics for every fetch.
  #[serde(default = "default_true")]
  pub metrics_enabled: bool,
}

impl Default for AdapterSection {
  fn default() -> Self {
    Self {
      log_level: default_log_level(),
      metrics_enabled: true,
    }
  }
}

/// GraphQL transport configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TransportConfig {
  /// Request timeout in seconds.
  #[serde(default = "default_timeout")]
  pub timeout_seconds: u64,
  /// Maximum in-flight requests per client.
  #[serde(default = "default_max_concurrent")]
  pub max_concurrent: usize,
  /// Retries on transient failures (transport, 429, 5xx).
  #[serde(default = "default_max_retries")]
  pub max_retries: u32,
  /// Base delay between retries, doubled each attempt (milliseconds).
  #[serde(default = "default_retry_base_delay")]
  pub retry_base_delay_ms: u64,
  /// Upper bound on a single backoff delay (milliseconds).
  #[serde(default = "default_max_retry_delay")]
  pub max_retry_delay_ms: u64,
}

impl TransportConfig {
  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_seconds)
  }

  pub fn retry_base_delay(&self) -> Duration {
    Duration::from_millis(self.retry_base_delay_ms)
  }

  pub fn max_retry_delay(&self) -> Duration {
    Duration::from_millis(self.max_retry_delay_ms)
  }
}

impl Default for TransportConfig {
  fn default() -> Self {
    Self {
      timeout_seconds: default_timeout(),
      max_concurrent: default_max_concurrent(),
      max_retries: default_max_retries(),
      retry_base_delay_ms: default_retry_base_delay(),
      max_retry_delay_ms: default_max_retry_delay(),
    }
  }
}

// Default value functions for serde

fn default_log_level() -> String {
  "info".to_string()
}

fn default_true() -> bool {
  true
}

fn default_timeout() -> u64 {
  30
}

fn default_max_concurrent() -> usize {
  4
}

fn default_max_retries() -> u32 {
  2
}

fn default_retry_base_delay() -> u64 {
  200
}

fn default_max_retry_delay() -> u64 {
  5_000
}
