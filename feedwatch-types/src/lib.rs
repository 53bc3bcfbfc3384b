//! # feedwatch-types
//!
//! Core types for data feed staleness monitoring. This crate defines the
//! shape of the feed records consumed by feedwatch: what a feed source hands
//! over each polling cycle, and the network classes notifications are routed
//! by.
//!
//! ## Design Goals
//!
//! - **No required dependencies**: Core types work without any serialization framework
//! - **Optional serialization**: Enable the `serde` feature to decode feed lists from JSON
//! - **Wire fidelity**: Numeric fields stay as the strings the upstream API returns;
//!   conversion (and its failure modes) belongs to the consumer
//! - **Ergonomic builders**: Fluent API for constructing feeds in tests and tools
//!
//! ## Features
//!
//! - `serde`: JSON/etc. serialization via serde, using the upstream camelCase field names
//!
//! ## Example
//!
//! ```rust
//! use feedwatch_types::Feed;
//!
//! let feed = Feed::builder("Price-ETH/USD-6", "ethereum-mainnet")
//!     .heartbeat_ms(3_600_000)
//!     .request(1_700_000_000)
//!     .request(1_700_003_600)
//!     .build();
//!
//! assert!(feed.is_monitorable());
//! assert_eq!(feed.requests.len(), 2);
//! ```

mod feed;
mod network;

pub use feed::*;
pub use network::*;
