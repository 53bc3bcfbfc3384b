//! GraphQL feed API as a feed source.

use async_trait::async_trait;
use feedwatch_adapters::graphql::GraphQlFeedClient;
use feedwatch_types::Feed;

use super::{FeedSource, SourceError};

#[async_trait]
impl FeedSource for GraphQlFeedClient {
    async fn fetch_feeds(&self) -> Result<Vec<Feed>, SourceError> {
        Ok(GraphQlFeedClient::fetch_feeds(self).await?)
    }

    fn description(&self) -> &str {
        self.endpoint()
    }
}
