//! Endpoint Table - Chain to Subgraph URL Mapping
//!
//! Immutable after construction and injected into the adapter; there is
//! no process-wide endpoint registry.

use std::collections::BTreeMap;

use anyhow::{Context, Result};

use crate::domain::Chain;

/// Immutable mapping from chain to subgraph endpoint URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTable {
  endpoints: BTreeMap<Chain, String>,
}

impl EndpointTable {
  /// Build a table from explicit `(chain, url)` pairs.
  pub fn new(entries: impl IntoIterator<Item = (Chain, String)>) -> Self {
    Self {
      endpoints: entries.into_iter().collect(),
    }
  }

  /// Parse the `[endpoints]` config table (chain identifier → URL).
  ///
  /// # Errors
  /// Fails on an unrecognised chain identifier.
  pub fn from_config(raw: &BTreeMap<String, String>) -> Result<Self> {
    let entries = raw
      .iter()
      .map(|(name, url)| {
        let chain = name
          .parse::<Chain>()
          .with_context(|| format!("Invalid [endpoints] key `{name}`"))?;
        Ok((chain, url.clone()))
      })
      .collect::<Result<BTreeMap<_, _>>>()?;
    Ok(Self { endpoints: entries })
  }

  /// Endpoint for `chain`, if configured.
  pub fn get(&self, chain: Chain) -> Option<&str> {
    self.endpoints.get(&chain).map(String::as_str)
  }

  /// Configured chains in stable order.
  pub fn chains(&self) -> impl Iterator<Item = Chain> + '_ {
    self.endpoints.keys().copied()
  }

  pub fn len(&self) -> usize {
    self.endpoints.len()
  }

  pub fn is_empty(&self) -> bool {
    self.endpoints.is_empty()
  }
}

impl Default for EndpointTable {
  /// Public Lyra subgraph for every supported chain.
  fn default() -> Self {
    Self::new(
      Chain::ALL
        .iter()
        .map(|chain| (*chain, chain.default_endpoint().to_string())),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_has_optimism() {
    let table = EndpointTable::default();
    assert_eq!(table.len(), 1);
    assert_eq!(
      table.get(Chain::Optimism),
      Some("https://api.lyra.finance/subgraph/optimism/v1/api")
    );
  }

  #[test]
  fn test_from_config_rejects_unknown_chain() {
    let mut raw = BTreeMap::new();
    raw.insert("solana".to_string(), "https://example.com".to_string());
    assert!(EndpointTable::from_config(&raw).is_err());
  }

  #[test]
  fn test_from_config_override() {
    let mut raw = BTreeMap::new();
    raw.insert("optimism".to_string(), "http://localhost:8000/graphql".to_string());
    let table = EndpointTable::from_config(&raw).unwrap();
    assert_eq!(table.get(Chain::Optimism), Some("http://localhost:8000/graphql"));
    assert_eq!(table.chains().collect::<Vec<_>>(), vec![Chain::Optimism]);
  }
}
