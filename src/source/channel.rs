//! Channel-based feed source.
//!
//! Serves the latest feed list pushed through a tokio watch channel. Useful
//! when another task owns the upstream connection, and in tests.

use async_trait::async_trait;
use feedwatch_types::Feed;
use tokio::sync::watch;

use super::{FeedSource, SourceError};

/// A feed source that returns whatever feed list was sent last.
///
/// # Example
///
/// ```
/// use feedwatch::ChannelSource;
///
/// let (tx, source) = ChannelSource::create("upstream-poller");
/// tx.send(Vec::new()).unwrap();
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<Vec<Feed>>,
    description: String,
}

impl ChannelSource {
    /// Create a new channel source.
    ///
    /// # Arguments
    ///
    /// * `receiver` - The receiving end of a watch channel
    /// * `source_description` - A description of where feeds come from
    pub fn new(receiver: watch::Receiver<Vec<Feed>>, source_description: &str) -> Self {
        let description = format!("channel: {}", source_description);
        Self {
            receiver,
            description,
        }
    }

    /// Create a channel pair; the source starts out with an empty feed list.
    pub fn create(source_description: &str) -> (watch::Sender<Vec<Feed>>, Self) {
        let (tx, rx) = watch::channel(Vec::new());
        let source = Self::new(rx, source_description);
        (tx, source)
    }
}

#[async_trait]
impl FeedSource for ChannelSource {
    async fn fetch_feeds(&self) -> Result<Vec<Feed>, SourceError> {
        // A dropped sender means nobody will ever refresh the list again.
        self.receiver.has_changed().map_err(|_| SourceError::Closed)?;
        Ok(self.receiver.borrow().clone())
    }

    fn description(&self) -> &str {
        &self.description
    }
}
