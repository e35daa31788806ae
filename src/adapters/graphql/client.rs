//! Subgraph HTTP Client - GraphQL over reqwest
//!
//! Wraps reqwest with a concurrency limit, request timeout and retries
//! for the subgraph fee queries. Implements the `SubgraphClient` port.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use tokio::sync::Semaphore;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

use super::types::{DailyFeesData, GraphqlRequest, GraphqlResponse};
use crate::config::TransportConfig;
use crate::domain::FeeSnapshot;
use crate::error::UpstreamFailure;
use crate::ports::SubgraphClient;

/// Longest error body kept in a `Status` failure.
const MAX_ERROR_BODY: usize = 512;

/// Configuration for the GraphQL HTTP client.
#[derive(Debug, Clone)]
pub struct GraphqlClientConfig {
  /// Request timeout.
  pub timeout: Duration,
  /// Maximum concurrent requests.
  pub max_concurrent: usize,
  /// Maximum retries on transient errors.
  pub max_retries: u32,
  /// Base delay between retries (exponential backoff).
  pub retry_base_delay: Duration,
  /// Ceiling for any single backoff delay.
  pub max_retry_delay: Duration,
}

impl Default for GraphqlClientConfig {
  fn default() -> Self {
    Self::from(&TransportConfig::default())
  }
}

impl From<&TransportConfig> for GraphqlClientConfig {
  fn from(transport: &TransportConfig) -> Self {
    Self {
      timeout: transport.timeout(),
      max_concurrent: transport.max_concurrent,
      max_retries: transport.max_retries,
      retry_base_delay: transport.retry_base_delay(),
      max_retry_delay: transport.max_retry_delay(),
    }
  }
}

/// Concurrency-limited GraphQL client for subgraph endpoints.
pub struct GraphqlClient {
  /// Underlying HTTP client.
  http: Client,
  /// Client configuration.
  config: GraphqlClientConfig,
  /// Concurrency limiter.
  semaphore: Arc<Semaphore>,
}

impl GraphqlClient {
  /// Create a new GraphQL client.
  pub fn new(config: GraphqlClientConfig) -> Result<Self> {
    let http = Client::builder()
      .timeout(config.timeout)
      .pool_max_idle_per_host(2)
      .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
      .build()
      .context("Failed to build HTTP client")?;

    let semaphore = Arc::new(Semaphore::new(config.max_concurrent.max(1)));

    Ok(Self {
      http,
      config,
      semaphore,
    })
  }

  /// POST a GraphQL request, retrying transient failures with backoff.
  async fn execute_with_retry<V>(
    &self,
    endpoint: &str,
    request: &GraphqlRequest<'_, V>,
  ) -> Result<String, UpstreamFailure>
  where
    V: serde::Serialize + Sync,
  {
    let mut attempt = 0;

    loop {
      let failure = match self.send_once(endpoint, request).await {
        Ok(body) => return Ok(body),
        Err(failure) => failure,
      };

      if !failure.is_transient() || attempt >= self.config.max_retries {
        return Err(failure);
      }

      attempt += 1;
      let delay = backoff_delay(&self.config, attempt);
      warn!(
        error = %failure,
        attempt,
        delay_ms = delay.as_millis(),
        "Subgraph request failed, retrying"
      );
      sleep(delay).await;
    }
  }

  /// Single POST; returns the body of a 2xx response.
  async fn send_once<V>(
    &self,
    endpoint: &str,
    request: &GraphqlRequest<'_, V>,
  ) -> Result<String, UpstreamFailure>
  where
    V: serde::Serialize + Sync,
  {
    let _permit = self
      .semaphore
      .acquire()
      .await
      .map_err(|_| UpstreamFailure::ClientClosed)?;

    let response = self.http.post(endpoint).json(request).send().await?;
    read_success_body(response).await
  }
}

/// Delay before retry number `attempt` (1-based): the base delay doubled
/// per attempt, saturating, and capped at `max_retry_delay`.
fn backoff_delay(config: &GraphqlClientConfig, attempt: u32) -> Duration {
  let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
  config
    .retry_base_delay
    .saturating_mul(factor)
    .min(config.max_retry_delay)
}

/// Turn a response into its body text, or a `Status` failure.
async fn read_success_body(response: Response) -> Result<String, UpstreamFailure> {
  let status = response.status();
  if status.is_success() {
    return Ok(response.text().await?);
  }

  let body: String = response
    .text()
    .await
    .unwrap_or_default()
    .chars()
    .take(MAX_ERROR_BODY)
    .collect();

  Err(UpstreamFailure::Status {
    status: status.as_u16(),
    body,
  })
}

#[async_trait]
impl SubgraphClient for GraphqlClient {
  #[instrument(skip(self))]
  async fn daily_fee_snapshots(
    &self,
    endpoint: &str,
    day_start: i64,
  ) -> Result<Vec<FeeSnapshot>, UpstreamFailure> {
    let request = GraphqlRequest::daily_fees(day_start);
    let body = self.execute_with_retry(endpoint, &request).await?;

    let response: GraphqlResponse<DailyFeesData> = serde_json::from_str(&body)?;
    let data = response.into_data()?;

    debug!(
      day_start,
      snapshots = data.snapshots.len(),
      "Daily fee snapshots fetched"
    );

    Ok(data.snapshots)
  }
}
