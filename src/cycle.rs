//! The polling cycle: fetch, compute status, decide, notify.
//!
//! ```text
//! FeedSource::fetch_feeds()
//!        │  (error aborts the cycle, state untouched)
//!        ▼
//! filter monitorable ─▶ FeedSample (malformed feeds skipped)
//!        │
//!        ▼
//! group by network ─▶ tracker::update() ─▶ State::merge()
//!        │
//!        ▼
//! decide() + first check ─▶ class_message() ─▶ Notifier::send() (mainnet ∥ testnet)
//! ```

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use feedwatch_types::NetworkClass;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::MonitorConfig;
use crate::decide::{decide, Decision};
use crate::notify::Notifier;
use crate::report::class_message;
use crate::source::{FeedSource, SourceError};
use crate::status::{update, FeedSample, State};

/// Errors that abort a cycle.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("failed to fetch feeds from {source_description}: {source}")]
    Fetch {
        source_description: String,
        #[source]
        source: SourceError,
    },
}

/// What happened during one cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// The state was empty when the cycle started.
    pub first_check: bool,
    /// Monitorable feeds whose status was computed.
    pub feeds: usize,
    /// Monitorable feeds skipped because their fields did not convert.
    pub skipped: usize,
    /// Per-class decision, first check included.
    pub decision: Decision,
    /// Classes whose summary was delivered.
    pub sent: Vec<NetworkClass>,
    /// Classes whose delivery failed.
    pub failed: Vec<NetworkClass>,
}

/// Owns the status state and runs cycles against a source and a notifier.
///
/// Cycles take `&mut self`, so two cycles can never interleave on the
/// same state.
#[derive(Debug)]
pub struct Monitor {
    source: Box<dyn FeedSource>,
    notifier: Box<dyn Notifier>,
    config: MonitorConfig,
    state: State,
}

impl Monitor {
    /// Create a monitor with empty state.
    pub fn new(
        source: Box<dyn FeedSource>,
        notifier: Box<dyn Notifier>,
        config: MonitorConfig,
    ) -> Self {
        Self {
            source,
            notifier,
            config,
            state: State::new(),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Run one cycle at the current wall-clock time.
    pub async fn run_cycle(&mut self) -> Result<CycleReport, CycleError> {
        self.run_cycle_at(current_timestamp_ms()).await
    }

    /// Run one cycle as if the current time were `now_ms`.
    pub async fn run_cycle_at(&mut self, now_ms: i64) -> Result<CycleReport, CycleError> {
        let feeds = self
            .source
            .fetch_feeds()
            .await
            .map_err(|source| CycleError::Fetch {
                source_description: self.source.description().to_string(),
                source,
            })?;

        let first_check = self.state.is_empty();
        let mut report = CycleReport {
            first_check,
            ..CycleReport::default()
        };

        let mut by_network: BTreeMap<String, Vec<FeedSample>> = BTreeMap::new();
        for feed in feeds.iter().filter(|feed| feed.is_monitorable()) {
            match FeedSample::try_from(feed) {
                Ok(sample) => by_network
                    .entry(feed.network.clone())
                    .or_default()
                    .push(sample),
                Err(err) => {
                    warn!(
                        network = %feed.network,
                        feed = %feed.feed_full_name,
                        error = %err,
                        "skipping malformed feed"
                    );
                    report.skipped += 1;
                }
            }
        }

        for (network, samples) in by_network {
            report.feeds += samples.len();
            let statuses = update(
                &network,
                &samples,
                self.state.get(&network),
                now_ms,
                &self.config,
            );
            self.state.merge(network, statuses);
        }

        report.decision = decide(&self.state).with_first_check(first_check);

        let (mainnet, testnet) = tokio::join!(
            self.dispatch(NetworkClass::Mainnet, report.decision),
            self.dispatch(NetworkClass::Testnet, report.decision),
        );
        for (class, outcome) in [(NetworkClass::Mainnet, mainnet), (NetworkClass::Testnet, testnet)] {
            match outcome {
                Some(true) => report.sent.push(class),
                Some(false) => report.failed.push(class),
                None => {}
            }
        }

        info!(
            feeds = report.feeds,
            skipped = report.skipped,
            networks = self.state.len(),
            first_check,
            sent = report.sent.len(),
            "feed status cycle complete"
        );

        Ok(report)
    }

    /// Send the summary for `class` if the decision calls for it.
    ///
    /// Returns `None` when nothing was attempted, otherwise whether the
    /// delivery succeeded. Failures are logged here and go no further.
    async fn dispatch(&self, class: NetworkClass, decision: Decision) -> Option<bool> {
        if !decision.for_class(class) {
            debug!(class = %class, "no status change, not notifying");
            return None;
        }

        let Some(text) = class_message(&self.state, class, self.config.days_to_request) else {
            debug!(class = %class, "no networks to report");
            return None;
        };

        match self.notifier.send(class, &text).await {
            Ok(()) => Some(true),
            Err(err) => {
                error!(class = %class, error = %err, "failed to send status summary");
                Some(false)
            }
        }
    }
}

/// Current Unix time in milliseconds.
pub fn current_timestamp_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
