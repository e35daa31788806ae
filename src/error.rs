//! Adapter error taxonomy.
//!
//! Everything that can go wrong while answering `fetch` funnels into
//! [`AdapterError`]. A failed query always surfaces as an error; the
//! adapter never substitutes a zero-valued summary.

use crate::domain::{AmountError, Chain};

/// Why the upstream subgraph query failed.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamFailure {
    /// Connection, TLS or timeout failure before a response arrived.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The GraphQL layer returned an `errors` payload.
    #[error("GraphQL errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// A 2xx response without a `data` object.
    #[error("response carried no data")]
    MissingData,

    /// The body was not the JSON shape we asked for.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The client's request limiter was shut down.
    #[error("subgraph client is closed")]
    ClientClosed,

    /// A fee field could not be summed.
    #[error("malformed fee amount: {0}")]
    Amount(#[from] AmountError),
}

impl UpstreamFailure {
    /// Whether a retry might succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            UpstreamFailure::Transport(_) => true,
            UpstreamFailure::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error("failed to get total fees on {chain}: {source}")]
    UpstreamQuery {
        chain: Chain,
        #[source]
        source: UpstreamFailure,
    },

    #[error("no subgraph endpoint configured for chain {0}")]
    UnsupportedChain(Chain),

    #[error("timestamp {0} has no representable UTC day start")]
    InvalidTimestamp(i64),
}

impl AdapterError {
    pub fn upstream(chain: Chain, source: impl Into<UpstreamFailure>) -> Self {
        AdapterError::UpstreamQuery {
            chain,
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdapterError>;
