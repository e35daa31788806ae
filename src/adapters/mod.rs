//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies. Each sub-module groups adapters by
//! infrastructure concern.
//!
//! Adapter categories:
//! - `graphql`: Subgraph GraphQL client over reqwest
//! - `metrics`: Prometheus registry for fetch outcomes

pub mod graphql;
pub mod metrics;
