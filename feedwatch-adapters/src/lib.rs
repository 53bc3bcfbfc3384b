//! # feedwatch-adapters
//!
//! Pre-built clients for the two services feedwatch talks to.
//!
//! ## Supported Systems
//!
//! - **GraphQL feed API** (`graphql` feature) - Fetches the full feed list,
//!   including each feed's heartbeat and observed update requests
//! - **Slack** (`slack` feature) - Posts status summaries with the Web API's
//!   `chat.postMessage` method
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use feedwatch_adapters::graphql::GraphQlFeedClient;
//! use feedwatch_adapters::slack::SlackClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let feeds = GraphQlFeedClient::builder()
//!         .endpoint("https://feeds.example.com/graphql")
//!         .build()?;
//!
//!     let slack = SlackClient::builder().token("xoxb-...").build()?;
//!
//!     let all = feeds.fetch_feeds().await?;
//!     slack.post_message("C0123456", &format!("{} feeds", all.len())).await?;
//!     Ok(())
//! }
//! ```

pub mod error;

#[cfg(feature = "graphql")]
pub mod graphql;

#[cfg(feature = "slack")]
pub mod slack;

pub use error::AdapterError;

// Re-export types for convenience
pub use feedwatch_types::{Feed, Request};
