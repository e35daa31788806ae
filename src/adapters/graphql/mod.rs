//! Subgraph GraphQL Adapter
//!
//! Implements the `SubgraphClient` port over HTTP. Handles request
//! encoding, GraphQL error envelopes, timeouts and transient retries.
//!
//! Sub-modules:
//! - `client`: reqwest client with concurrency limit and backoff
//! - `types`: query text and request/response envelopes

pub mod client;
pub mod types;

pub use client::{GraphqlClient, GraphqlClientConfig};
