//! # feedwatch
//!
//! A staleness monitor for data feeds.
//!
//! Each feed is expected to be updated at least once per heartbeat. feedwatch
//! polls a feed source, works out which feeds are overdue, and posts one
//! summary line per network to a mainnet or a testnet channel. A summary is
//! only posted when some feed of that class went stale or recovered since the
//! previous cycle (and always on the first cycle of the process).
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                           Monitor                            │
//! │  ┌─────────┐   ┌──────────┐   ┌──────────┐   ┌───────────┐   │
//! │  │ source  │──▶│  status  │──▶│  decide  │──▶│  report   │   │
//! │  │ (input) │   │ (State)  │   │ (per class)  │ (text)    │   │
//! │  └─────────┘   └──────────┘   └──────────┘   └─────┬─────┘   │
//! │                                                    ▼         │
//! │                                              ┌───────────┐   │
//! │                                              │  notify   │   │
//! │                                              └───────────┘   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`source`]**: Feed source abstraction ([`FeedSource`] trait) with implementations
//!   for the GraphQL feed API, JSON files, and channels
//! - **[`status`]**: Delay computation, outdated classification and the running [`State`]
//! - **[`decide`]**: Whether each network class warrants a notification this cycle
//! - **[`report`]**: Per-network summary lines with color, counts and worst delay
//! - **[`notify`]**: Delivery abstraction ([`Notifier`] trait) for Slack or the log
//! - **[`cycle`]**: The [`Monitor`] tying it all together
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Watch the feed API every five minutes and post to Slack
//! FEEDWATCH_GRAPHQL_ENDPOINT=https://feeds.example.com/graphql \
//! FEEDWATCH_SLACK_TOKEN=xoxb-... \
//! feedwatch --config feedwatch.toml
//!
//! # Check a local feed dump once and log the summaries
//! feedwatch --file feeds.json --once --dry-run
//! ```
//!
//! ### As a library
//!
//! ```
//! use feedwatch::{ChannelSource, LogNotifier, Monitor, MonitorConfig};
//!
//! let (_tx, source) = ChannelSource::create("example");
//! let monitor = Monitor::new(Box::new(source), Box::new(LogNotifier), MonitorConfig::default());
//! assert!(monitor.state().is_empty());
//! ```

pub mod config;
pub mod cycle;
pub mod decide;
pub mod notify;
pub mod report;
pub mod source;
pub mod status;

// Re-export main types for convenience
pub use config::MonitorConfig;
pub use cycle::{CycleError, CycleReport, Monitor};
pub use decide::{decide, Decision};
pub use feedwatch_types::{Feed, NetworkClass, Request};
pub use notify::{LogNotifier, Notifier, NotifyError};
#[cfg(feature = "http")]
pub use notify::SlackNotifier;
pub use report::{Color, NetworkSummary};
pub use source::{ChannelSource, FeedSource, FileSource, SourceError};
pub use status::{FeedStatusInfo, FeedsStatusByNetwork, State};
