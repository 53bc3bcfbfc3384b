//! Feed source client for a GraphQL feeds API.
//!
//! The API exposes a `feeds` query returning every deployed feed together
//! with its network, heartbeat and the update requests observed for it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use feedwatch_adapters::graphql::GraphQlFeedClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GraphQlFeedClient::builder()
//!         .endpoint("https://feeds.example.com/graphql")
//!         .build()?;
//!
//!     for feed in client.fetch_feeds().await? {
//!         println!("{} on {}: {} requests", feed.feed_full_name, feed.network, feed.requests.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use feedwatch_types::Feed;

use crate::AdapterError;

/// Query selecting exactly the fields the status engine needs.
pub const FEEDS_QUERY: &str = "query feeds { feeds { feeds { feedFullName network heartbeat requests { timestamp } } } }";

/// Client for fetching the feed list from a GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct GraphQlFeedClient {
    client: Client,
    endpoint: String,
    query: String,
}

impl GraphQlFeedClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> GraphQlFeedClientBuilder {
        GraphQlFeedClientBuilder::default()
    }

    /// The endpoint this client queries.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch every feed known to the API.
    pub async fn fetch_feeds(&self) -> Result<Vec<Feed>, AdapterError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "query": self.query }))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED
            || response.status() == reqwest::StatusCode::FORBIDDEN
        {
            return Err(AdapterError::Auth(format!(
                "API returned status {}",
                response.status()
            )));
        }

        if !response.status().is_success() {
            return Err(AdapterError::Http(format!(
                "API returned status {}",
                response.status()
            )));
        }

        let body: GraphQlResponse<FeedsData> = response
            .json()
            .await
            .map_err(|e| AdapterError::Parse(e.to_string()))?;

        body.into_feeds()
    }
}

/// Builder for GraphQlFeedClient.
#[derive(Debug, Default)]
pub struct GraphQlFeedClientBuilder {
    endpoint: Option<String>,
    query: Option<String>,
    timeout: Option<Duration>,
}

impl GraphQlFeedClientBuilder {
    /// Set the GraphQL endpoint (e.g., "https://feeds.example.com/graphql").
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Replace the feeds query. The response must keep the `feeds.feeds` shape.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set the request timeout (default: 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<GraphQlFeedClient, AdapterError> {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(30));

        let client = Client::builder().timeout(timeout).build()?;

        Ok(GraphQlFeedClient {
            client,
            endpoint: self
                .endpoint
                .unwrap_or_else(|| "http://localhost:4000/graphql".to_string()),
            query: self.query.unwrap_or_else(|| FEEDS_QUERY.to_string()),
        })
    }
}

/// Envelope of every GraphQL response.
#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct FeedsData {
    feeds: FeedsPage,
}

#[derive(Debug, Deserialize)]
struct FeedsPage {
    #[serde(default)]
    feeds: Vec<Feed>,
}

impl GraphQlResponse<FeedsData> {
    fn into_feeds(self) -> Result<Vec<Feed>, AdapterError> {
        if !self.errors.is_empty() {
            let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(AdapterError::Api(messages.join("; ")));
        }

        self.data
            .map(|data| data.feeds.feeds)
            .ok_or_else(|| AdapterError::Parse("response carried no data".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Vec<Feed>, AdapterError> {
        let response: GraphQlResponse<FeedsData> = serde_json::from_str(json).unwrap();
        response.into_feeds()
    }

    #[test]
    fn test_builder_defaults() {
        let client = GraphQlFeedClient::builder().build().unwrap();
        assert_eq!(client.endpoint, "http://localhost:4000/graphql");
        assert_eq!(client.query, FEEDS_QUERY);
    }

    #[test]
    fn test_builder_custom() {
        let client = GraphQlFeedClient::builder()
            .endpoint("https://feeds.example.com/graphql")
            .query("query { feeds { feeds { feedFullName network } } }")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(client.endpoint(), "https://feeds.example.com/graphql");
        assert!(client.query.starts_with("query { feeds"));
    }

    #[test]
    fn test_parse_feeds() {
        let feeds = parse(
            r#"{
                "data": {
                    "feeds": {
                        "feeds": [
                            {
                                "feedFullName": "Price-ETH/USD-6",
                                "network": "ethereum-mainnet",
                                "heartbeat": "3600000",
                                "requests": [{ "timestamp": "1703160000" }]
                            },
                            {
                                "feedFullName": "Price-BTC/USD-6",
                                "network": "ethereum-sepolia",
                                "heartbeat": null,
                                "requests": []
                            }
                        ]
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(feeds.len(), 2);
        assert_eq!(feeds[0].feed_full_name, "Price-ETH/USD-6");
        assert_eq!(feeds[0].requests[0].timestamp, "1703160000");
        assert!(feeds[1].heartbeat.is_none());
    }

    #[test]
    fn test_graphql_errors_are_reported() {
        let err = parse(
            r#"{
                "data": null,
                "errors": [
                    { "message": "rate limited" },
                    { "message": "try again later" }
                ]
            }"#,
        )
        .unwrap_err();

        match err {
            AdapterError::Api(message) => assert_eq!(message, "rate limited; try again later"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_data_is_a_parse_error() {
        let err = parse(r#"{ "data": null }"#).unwrap_err();
        assert!(matches!(err, AdapterError::Parse(_)));
    }
}
