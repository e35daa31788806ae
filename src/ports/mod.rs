//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `SubgraphClient`: Daily fee snapshot queries against a subgraph

pub mod subgraph;

pub use subgraph::SubgraphClient;
