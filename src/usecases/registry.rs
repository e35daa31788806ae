//! Adapter Registry - Host-facing Per-chain Entries
//!
//! The host aggregator addresses adapters by chain and expects each entry
//! to expose `fetch(timestamp)`, `start()` and `meta`. The registry wraps
//! one shared [`DailyFeeAdapter`] into such entries.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::{AdapterMeta, Chain, DailyFeeSummary};
use crate::error::Result;
use crate::ports::SubgraphClient;

use super::daily_fees::DailyFeeAdapter;

/// One chain's view of the fee adapter.
pub struct ChainAdapter<C: SubgraphClient> {
  chain: Chain,
  inner: Arc<DailyFeeAdapter<C>>,
}

impl<C: SubgraphClient> Clone for ChainAdapter<C> {
  fn clone(&self) -> Self {
    Self {
      chain: self.chain,
      inner: Arc::clone(&self.inner),
    }
  }
}

impl<C: SubgraphClient> ChainAdapter<C> {
  pub fn chain(&self) -> Chain {
    self.chain
  }

  /// Daily fee record for the UTC day containing `timestamp`.
  pub async fn fetch(&self, timestamp: i64) -> Result<DailyFeeSummary> {
    self.inner.fetch(self.chain, timestamp).await
  }

  /// Earliest timestamp with valid data.
  pub fn start(&self) -> i64 {
    self.inner.start(self.chain)
  }

  pub fn meta(&self) -> AdapterMeta {
    self.inner.meta()
  }
}

/// Static description of one entry, as published to the host.
#[derive(Debug, Clone, Serialize)]
pub struct ChainManifest {
  pub start: i64,
  pub meta: AdapterMeta,
}

/// Registry manifest: `{ "adapter": { "<chain>": { start, meta } } }`.
#[derive(Debug, Clone, Serialize)]
pub struct RegistryManifest {
  pub adapter: BTreeMap<Chain, ChainManifest>,
}

/// Per-chain entries over a shared adapter.
pub struct AdapterRegistry<C: SubgraphClient> {
  entries: BTreeMap<Chain, ChainAdapter<C>>,
}

impl<C: SubgraphClient> AdapterRegistry<C> {
  /// One entry for every chain the adapter has an endpoint for.
  pub fn new(adapter: DailyFeeAdapter<C>) -> Self {
    let inner = Arc::new(adapter);
    let entries = inner
      .chains()
      .map(|chain| {
        (
          chain,
          ChainAdapter {
            chain,
            inner: Arc::clone(&inner),
          },
        )
      })
      .collect();
    Self { entries }
  }

  pub fn get(&self, chain: Chain) -> Option<&ChainAdapter<C>> {
    self.entries.get(&chain)
  }

  /// Entries in chain order.
  pub fn entries(&self) -> impl Iterator<Item = &ChainAdapter<C>> {
    self.entries.values()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Static part of every entry, for publishing to the host.
  pub fn manifest(&self) -> RegistryManifest {
    RegistryManifest {
      adapter: self
        .entries
        .iter()
        .map(|(chain, entry)| {
          (
            *chain,
            ChainManifest {
              start: entry.start(),
              meta: entry.meta(),
            },
          )
        })
        .collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use async_trait::async_trait;

  use super::*;
  use crate::config::EndpointTable;
  use crate::domain::FeeSnapshot;
  use crate::error::UpstreamFailure;

  struct EmptySubgraph;

  #[async_trait]
  impl SubgraphClient for EmptySubgraph {
    async fn daily_fee_snapshots(
      &self,
      _endpoint: &str,
      _day_start: i64,
    ) -> std::result::Result<Vec<FeeSnapshot>, UpstreamFailure> {
      Ok(Vec::new())
    }
  }

  fn registry() -> AdapterRegistry<EmptySubgraph> {
    AdapterRegistry::new(DailyFeeAdapter::new(
      Arc::new(EmptySubgraph),
      EndpointTable::default(),
    ))
  }

  #[test]
  fn test_one_entry_per_configured_chain() {
    let registry = registry();
    assert_eq!(registry.len(), 1);
    let entry = registry.get(Chain::Optimism).unwrap();
    assert_eq!(entry.chain(), Chain::Optimism);
    assert_eq!(entry.start(), 1_656_154_800);
  }

  #[test]
  fn test_manifest_shape() {
    let json = serde_json::to_value(registry().manifest()).unwrap();
    let optimism = &json["adapter"]["optimism"];
    assert_eq!(optimism["start"], 1_656_154_800);
    assert_eq!(
      optimism["meta"]["methodology"]["Revenue"],
      "Governance have no revenue"
    );
  }

  #[tokio::test]
  async fn test_entry_fetch_with_no_snapshots() {
    let registry = registry();
    let entry = registry.get(Chain::Optimism).unwrap().clone();
    let summary = entry.fetch(1_656_115_200).await.unwrap();
    assert_eq!(summary.daily_fees, "0");
    assert_eq!(summary.daily_protocol_revenue, "0");
  }
}
