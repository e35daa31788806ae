//! Supported chains and their deployment constants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Chains the Lyra subgraph is indexed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    /// Optimism mainnet (Lyra Avalon deployment).
    Optimism,
}

impl Chain {
    /// Every chain the adapter knows how to serve.
    pub const ALL: [Chain; 1] = [Chain::Optimism];

    /// Host-facing chain identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Chain::Optimism => "optimism",
        }
    }

    /// Earliest day (Unix seconds) the subgraph holds valid snapshots for.
    pub fn start_timestamp(&self) -> i64 {
        match self {
            Chain::Optimism => 1_656_154_800,
        }
    }

    /// Public subgraph endpoint used when no override is configured.
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            Chain::Optimism => "https://api.lyra.finance/subgraph/optimism/v1/api",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a chain identifier is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chain identifier: {0}")]
pub struct UnknownChain(pub String);

impl FromStr for Chain {
    type Err = UnknownChain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "optimism" => Ok(Chain::Optimism),
            other => Err(UnknownChain(other.to_string())),
        }
    }
}
