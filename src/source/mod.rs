//! Feed source abstraction.
//!
//! This module provides a trait-based abstraction for retrieving the feed
//! list once per cycle from various backends (the GraphQL feed API, a JSON
//! file, or an in-memory channel).

mod channel;
mod file;
#[cfg(feature = "http")]
mod graphql;

pub use channel::ChannelSource;
pub use file::FileSource;

use std::fmt::Debug;

use async_trait::async_trait;
use feedwatch_types::Feed;
use thiserror::Error;

/// Errors a feed source can fail with. Any of them aborts the cycle.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("read error: {0}")]
    Read(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("source closed")]
    Closed,

    #[cfg(feature = "http")]
    #[error(transparent)]
    Adapter(#[from] feedwatch_adapters::AdapterError),
}

/// Trait for retrieving the full feed list.
///
/// # Example
///
/// ```no_run
/// use feedwatch::{FeedSource, FileSource};
///
/// # tokio_test::block_on(async {
/// let source = FileSource::new("feeds.json");
/// let feeds = source.fetch_feeds().await.unwrap();
/// println!("Got {} feeds from {}", feeds.len(), source.description());
/// # });
/// ```
#[async_trait]
pub trait FeedSource: Send + Sync + Debug {
    /// Fetch every feed, monitorable or not.
    async fn fetch_feeds(&self) -> Result<Vec<Feed>, SourceError>;

    /// Returns a human-readable description of the source, for logs.
    fn description(&self) -> &str;
}
