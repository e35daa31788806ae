//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces. Each use case is a
//! self-contained operation the host calls.
//!
//! Use cases:
//! - `DailyFeeAdapter`: timestamp → subgraph query → daily fee record
//! - `AdapterRegistry`: per-chain `fetch`/`start`/`meta` entries for the host

pub mod daily_fees;
pub mod registry;

pub use daily_fees::DailyFeeAdapter;
pub use registry::{AdapterRegistry, ChainAdapter, RegistryManifest};
