//! Per-network summary lines.

use crate::status::{FeedStatusInfo, FeedsStatusByNetwork};

use super::format::format_delay;

/// Overall color of a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Color {
    /// No feed is outdated.
    Green,
    /// Some, but not all, feeds are outdated.
    Yellow,
    /// Every feed is outdated.
    Red,
}

impl Color {
    /// Color for a network with `outdated` of `total` feeds late.
    pub fn from_counts(outdated: usize, total: usize) -> Self {
        if outdated == 0 {
            Color::Green
        } else if outdated == total {
            Color::Red
        } else {
            Color::Yellow
        }
    }

    /// Slack emoji shortcode for display.
    pub fn glyph(&self) -> &'static str {
        match self {
            Color::Green => ":large_green_circle:",
            Color::Yellow => ":large_yellow_circle:",
            Color::Red => ":red_circle:",
        }
    }
}

/// Aggregated view of one network's feeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSummary {
    pub network: String,
    pub color: Color,
    pub fresh: usize,
    pub total: usize,
    /// Most negative time-to-update among outdated feeds.
    pub largest_delay_ms: Option<i64>,
    /// At least one feed flipped since the previous cycle.
    pub changed: bool,
}

impl NetworkSummary {
    pub fn from_statuses(network: &str, statuses: &FeedsStatusByNetwork) -> Self {
        let (outdated, fresh): (Vec<&FeedStatusInfo>, Vec<_>) =
            statuses.values().partition(|status| status.is_outdated);

        Self {
            network: network.to_string(),
            color: Color::from_counts(outdated.len(), statuses.len()),
            fresh: fresh.len(),
            total: statuses.len(),
            largest_delay_ms: outdated.iter().map(|s| s.ms_to_be_updated).min(),
            changed: statuses.values().any(|status| status.status_changed),
        }
    }

    /// Render as `"{glyph} {network} ({fresh}/{total}) {delay}"`, bolded
    /// when anything changed.
    pub fn render(&self, cap_days: i64) -> String {
        let delay = self
            .largest_delay_ms
            .map(|ms| format_delay(ms, cap_days))
            .unwrap_or_default();

        let line = format!(
            "{} {} ({}/{}) {}",
            self.color.glyph(),
            self.network,
            self.fresh,
            self.total,
            delay
        );
        let line = line.trim_end();

        if self.changed {
            format!("*{}*", line)
        } else {
            line.to_string()
        }
    }
}

/// Summary line for one network.
pub fn network_message(network: &str, statuses: &FeedsStatusByNetwork, cap_days: i64) -> String {
    NetworkSummary::from_statuses(network, statuses).render(cap_days)
}
