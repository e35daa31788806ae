//! Subgraph GraphQL Request/Response Types
//!
//! Serialization types for the `marketVolumeAndFeesSnapshots` query.
//! Requests follow the standard GraphQL-over-HTTP JSON envelope.

use serde::{Deserialize, Serialize};

use crate::domain::FeeSnapshot;
use crate::error::UpstreamFailure;

/// Daily fee snapshots for every market, one-day periods only.
pub const DAILY_FEES_QUERY: &str = r#"
query ($timestamp: Int) {
  marketVolumeAndFeesSnapshots(
    where: { period: 86400, timestamp: $timestamp }
  ) {
    vegaFees
    varianceFees
    spotPriceFees
    optionPriceFees
    liquidatorFees
    smLiquidationFees
    lpLiquidationFees
  }
}
"#;

/// GraphQL-over-HTTP request body.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest<'a, V> {
  pub query: &'a str,
  pub variables: V,
}

/// Variables for [`DAILY_FEES_QUERY`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DailyFeesVariables {
  /// UTC midnight opening the requested period.
  pub timestamp: i64,
}

impl GraphqlRequest<'static, DailyFeesVariables> {
  /// Request body for one day's fee snapshots.
  pub fn daily_fees(day_start: i64) -> Self {
    Self {
      query: DAILY_FEES_QUERY,
      variables: DailyFeesVariables {
        timestamp: day_start,
      },
    }
  }
}

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
  pub message: String,
}

/// GraphQL-over-HTTP response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
  pub data: Option<T>,
  pub errors: Option<Vec<GraphqlError>>,
}

impl<T> GraphqlResponse<T> {
  /// Unwrap `data`, treating any reported error as a failed query.
  ///
  /// Partial results alongside errors are discarded.
  pub fn into_data(self) -> Result<T, UpstreamFailure> {
    if let Some(errors) = self.errors.filter(|e| !e.is_empty()) {
      return Err(UpstreamFailure::GraphQl(
        errors.into_iter().map(|e| e.message).collect(),
      ));
    }
    self.data.ok_or(UpstreamFailure::MissingData)
  }
}

/// `data` payload of [`DAILY_FEES_QUERY`].
#[derive(Debug, Clone, Deserialize)]
pub struct DailyFeesData {
  #[serde(rename = "marketVolumeAndFeesSnapshots")]
  pub snapshots: Vec<FeeSnapshot>,
}
