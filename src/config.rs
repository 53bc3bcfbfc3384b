//! Monitor configuration.
//!
//! Configuration is read once at startup from an optional TOML file and
//! `FEEDWATCH_*` environment variables (environment wins), then passed by
//! reference into the status engine. Nothing below this module looks at the
//! environment.
//!
//! ```toml
//! admissible_delay = 4
//! admissible_delay_long = 2
//! fast_update_keywords = ["Price-"]
//! mainnet_keywords = ["mainnet", "-one"]
//! days_to_consider_absent = 1
//! days_to_request = 2
//! mainnet_channel = "C0123456"
//! testnet_channel = "C0654321"
//! ```
//!
//! List keys accept comma-separated values from the environment, e.g.
//! `FEEDWATCH_MAINNET_KEYWORDS=mainnet,-one`.

use std::path::Path;

use anyhow::Result;
use config::{Config, Environment, File};
use feedwatch_types::NetworkClass;
use serde::Deserialize;

/// Environment variable prefix for every configuration key.
pub const ENV_PREFIX: &str = "FEEDWATCH";

/// Settings for staleness computation and notification routing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Tolerance divisor for ordinary feeds: a feed may run
    /// `heartbeat / admissible_delay` late. Zero disables the tolerance.
    pub admissible_delay: u64,
    /// Tolerance divisor for feeds matching `fast_update_keywords`.
    pub admissible_delay_long: u64,
    /// Feed name fragments selecting `admissible_delay_long`.
    pub fast_update_keywords: Vec<String>,
    /// Network name fragments classifying a network as mainnet.
    pub mainnet_keywords: Vec<String>,
    /// Days subtracted from "now" when rendering a feed that never updated.
    pub days_to_consider_absent: i64,
    /// Overdue delays longer than this many days render as `> Nd`.
    pub days_to_request: i64,
    /// Notification channel for mainnet summaries.
    pub mainnet_channel: Option<String>,
    /// Notification channel for testnet summaries.
    pub testnet_channel: Option<String>,
    /// Feed API endpoint used by the binary.
    pub graphql_endpoint: Option<String>,
    /// Slack bot token used by the binary.
    pub slack_token: Option<String>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            admissible_delay: 4,
            admissible_delay_long: 2,
            fast_update_keywords: Vec::new(),
            mainnet_keywords: vec!["mainnet".to_string()],
            days_to_consider_absent: 1,
            days_to_request: 2,
            mainnet_channel: None,
            testnet_channel: None,
            graphql_endpoint: None,
            slack_token: None,
        }
    }
}

impl MonitorConfig {
    /// Load configuration from an optional file plus the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let config = builder
            .add_source(
                env.try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("fast_update_keywords")
                    .with_list_parse_key("mainnet_keywords"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Tolerance divisor for the named feed.
    pub fn admissible_delay_for(&self, feed_name: &str) -> u64 {
        if matches_any(feed_name, &self.fast_update_keywords) {
            self.admissible_delay_long
        } else {
            self.admissible_delay
        }
    }

    /// Whether the named network belongs to the mainnet class.
    pub fn is_mainnet(&self, network: &str) -> bool {
        matches_any(network, &self.mainnet_keywords)
    }

    /// Channel configured for a network class.
    pub fn channel(&self, class: NetworkClass) -> Option<&str> {
        match class {
            NetworkClass::Mainnet => self.mainnet_channel.as_deref(),
            NetworkClass::Testnet => self.testnet_channel.as_deref(),
        }
        .filter(|channel| !channel.trim().is_empty())
    }
}

// Case-insensitive substring match; blank keywords never match.
fn matches_any(name: &str, keywords: &[String]) -> bool {
    let name = name.to_lowercase();
    keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .any(|k| !k.is_empty() && name.contains(&k))
}
