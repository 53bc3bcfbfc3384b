//! File-based feed source.
//!
//! Reads a JSON array of feeds from disk on every fetch.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use feedwatch_types::Feed;

use super::{FeedSource, SourceError};

/// A feed source that reads the feed list from a JSON file.
///
/// The file holds the same records the feed API returns, e.g.
/// `[{"feedFullName": "...", "network": "...", "heartbeat": "...", "requests": [...]}]`.
/// It is re-read on every fetch so that an external process can keep it
/// current.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self { path, description }
    }

    /// Returns the path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FeedSource for FileSource {
    async fn fetch_feeds(&self) -> Result<Vec<Feed>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::Read(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| SourceError::Parse(e.to_string()))
    }

    fn description(&self) -> &str {
        &self.description
    }
}
