//! Feed - a named data stream and the update requests observed for it.

/// A data feed as reported by the feed source.
///
/// Feeds are identified by their full name, which is unique across all
/// networks. Numeric fields are kept as the strings the upstream API
/// returns them as.
///
/// # Example
///
/// ```rust
/// use feedwatch_types::Feed;
///
/// let feed = Feed::builder("Price-BTC/USD-6", "polygon-amoy")
///     .heartbeat_ms(86_400_000)
///     .build();
///
/// assert!(feed.requests.is_empty());
/// assert_eq!(feed.network, "polygon-amoy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Feed {
    /// Unique feed name (e.g., "Price-ETH/USD-6").
    pub feed_full_name: String,

    /// Network the feed is deployed on (e.g., "ethereum-mainnet").
    pub network: String,

    /// Required update interval in milliseconds, as a numeric string.
    ///
    /// Feeds without a heartbeat are not monitored.
    #[cfg_attr(feature = "serde", serde(default))]
    pub heartbeat: Option<String>,

    /// Update requests observed for this feed, in no particular order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub requests: Vec<Request>,
}

impl Feed {
    /// Create a new feed with no heartbeat and no requests.
    pub fn new(feed_full_name: impl Into<String>, network: impl Into<String>) -> Self {
        Self {
            feed_full_name: feed_full_name.into(),
            network: network.into(),
            heartbeat: None,
            requests: Vec::new(),
        }
    }

    /// Create a builder for constructing feeds.
    pub fn builder(feed_full_name: impl Into<String>, network: impl Into<String>) -> FeedBuilder {
        FeedBuilder::new(feed_full_name, network)
    }

    /// Whether this feed carries a heartbeat and should be watched.
    ///
    /// A blank heartbeat, or one that is numerically zero, counts as absent.
    pub fn is_monitorable(&self) -> bool {
        match self.heartbeat.as_deref().map(str::trim) {
            None | Some("") => false,
            Some(raw) => raw.parse::<u64>().map_or(true, |ms| ms != 0),
        }
    }
}

/// A single observed update of a feed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    /// Unix timestamp in seconds, as a numeric string.
    pub timestamp: String,
}

impl Request {
    /// Create a request observed at the given Unix time (seconds).
    pub fn at_secs(secs: i64) -> Self {
        Self {
            timestamp: secs.to_string(),
        }
    }
}

/// Builder for `Feed`.
#[derive(Debug)]
pub struct FeedBuilder {
    feed: Feed,
}

impl FeedBuilder {
    /// Create a new builder.
    pub fn new(feed_full_name: impl Into<String>, network: impl Into<String>) -> Self {
        Self {
            feed: Feed::new(feed_full_name, network),
        }
    }

    /// Set the heartbeat from a millisecond count.
    pub fn heartbeat_ms(mut self, ms: u64) -> Self {
        self.feed.heartbeat = Some(ms.to_string());
        self
    }

    /// Set the heartbeat from its raw string form.
    pub fn heartbeat_raw(mut self, raw: impl Into<String>) -> Self {
        self.feed.heartbeat = Some(raw.into());
        self
    }

    /// Add a request observed at the given Unix time (seconds).
    pub fn request(mut self, secs: i64) -> Self {
        self.feed.requests.push(Request::at_secs(secs));
        self
    }

    /// Add a request with a raw timestamp string.
    pub fn request_raw(mut self, timestamp: impl Into<String>) -> Self {
        self.feed.requests.push(Request {
            timestamp: timestamp.into(),
        });
        self
    }

    /// Build the feed.
    pub fn build(self) -> Feed {
        self.feed
    }
}
