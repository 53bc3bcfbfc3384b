//! Conversion from wire feeds into the numbers the status engine works on.

use std::num::ParseIntError;

use feedwatch_types::Feed;
use thiserror::Error;

/// A feed whose numeric fields could not be converted.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("feed {feed}: no heartbeat")]
    MissingHeartbeat { feed: String },

    #[error("feed {feed}: invalid heartbeat {value:?}: {source}")]
    InvalidHeartbeat {
        feed: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("feed {feed}: invalid request timestamp {value:?}: {source}")]
    InvalidTimestamp {
        feed: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// A monitorable feed reduced to its heartbeat and latest update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSample {
    pub name: String,
    pub heartbeat_ms: i64,
    /// Unix seconds of the most recent request, if any was ever observed.
    pub last_update_secs: Option<i64>,
}

impl TryFrom<&Feed> for FeedSample {
    type Error = ConversionError;

    fn try_from(feed: &Feed) -> Result<Self, Self::Error> {
        let raw = feed
            .heartbeat
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or_else(|| ConversionError::MissingHeartbeat {
                feed: feed.feed_full_name.clone(),
            })?;

        let heartbeat_ms = raw
            .parse::<u64>()
            .map(|ms| i64::try_from(ms).unwrap_or(i64::MAX))
            .map_err(|source| ConversionError::InvalidHeartbeat {
                feed: feed.feed_full_name.clone(),
                value: raw.to_string(),
                source,
            })?;

        let mut last_update_secs = None;
        for request in &feed.requests {
            let value = request.timestamp.trim();
            let secs = value
                .parse::<i64>()
                .map_err(|source| ConversionError::InvalidTimestamp {
                    feed: feed.feed_full_name.clone(),
                    value: value.to_string(),
                    source,
                })?;
            last_update_secs = last_update_secs.max(Some(secs));
        }

        Ok(Self {
            name: feed.feed_full_name.clone(),
            heartbeat_ms,
            last_update_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_request_wins() {
        let feed = Feed::builder("Price-ETH/USD-6", "ethereum-mainnet")
            .heartbeat_ms(3_600_000)
            .request(1_703_160_000)
            .request(1_703_170_000)
            .request(1_703_165_000)
            .build();

        let sample = FeedSample::try_from(&feed).unwrap();
        assert_eq!(sample.name, "Price-ETH/USD-6");
        assert_eq!(sample.heartbeat_ms, 3_600_000);
        assert_eq!(sample.last_update_secs, Some(1_703_170_000));
    }

    #[test]
    fn test_no_requests() {
        let feed = Feed::builder("Price-ETH/USD-6", "ethereum-mainnet")
            .heartbeat_raw(" 60000 ")
            .build();

        let sample = FeedSample::try_from(&feed).unwrap();
        assert_eq!(sample.heartbeat_ms, 60_000);
        assert_eq!(sample.last_update_secs, None);
    }

    #[test]
    fn test_invalid_heartbeat() {
        let feed = Feed::builder("Price-ETH/USD-6", "ethereum-mainnet")
            .heartbeat_raw("-5")
            .build();

        let err = FeedSample::try_from(&feed).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidHeartbeat { ref value, .. } if value == "-5"));
        assert!(err.to_string().contains("Price-ETH/USD-6"));
    }

    #[test]
    fn test_missing_heartbeat() {
        let feed = Feed::new("Price-ETH/USD-6", "ethereum-mainnet");
        let err = FeedSample::try_from(&feed).unwrap_err();
        assert!(matches!(err, ConversionError::MissingHeartbeat { .. }));
    }

    #[test]
    fn test_invalid_timestamp() {
        let feed = Feed::builder("Price-ETH/USD-6", "ethereum-mainnet")
            .heartbeat_ms(3_600_000)
            .request(1_703_160_000)
            .request_raw("yesterday")
            .build();

        let err = FeedSample::try_from(&feed).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidTimestamp { ref value, .. } if value == "yesterday"));
    }
}
