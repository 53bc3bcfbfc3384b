//! Per-feed status computation and the running state it is merged into.

use std::collections::BTreeMap;

use feedwatch_types::NetworkClass;

use super::delay::{is_outdated, ms_to_be_updated};
use super::sample::FeedSample;
use crate::config::MonitorConfig;

/// Status of one feed as of the latest cycle it was seen in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedStatusInfo {
    pub is_outdated: bool,
    /// Signed time left before the feed is late; negative when overdue.
    pub ms_to_be_updated: i64,
    /// Outdated-ness flipped relative to the previous cycle.
    pub status_changed: bool,
    pub is_mainnet: bool,
}

/// Feed name → status, for a single network.
pub type FeedsStatusByNetwork = BTreeMap<String, FeedStatusInfo>;

/// Compute this cycle's status for a network's feeds and merge it over the
/// network's previous statuses.
///
/// Feeds with no previous entry are never reported as changed. Previous
/// entries for feeds absent from `feeds` are kept as they were.
pub fn update(
    network: &str,
    feeds: &[FeedSample],
    previous: Option<&FeedsStatusByNetwork>,
    now_ms: i64,
    config: &MonitorConfig,
) -> FeedsStatusByNetwork {
    let is_mainnet = config.is_mainnet(network);
    let mut merged = previous.cloned().unwrap_or_default();

    for feed in feeds {
        let ms_to_be_updated = ms_to_be_updated(
            feed.heartbeat_ms,
            Some(config.admissible_delay_for(&feed.name)),
            feed.last_update_secs,
            now_ms,
            config.days_to_consider_absent,
        );
        let is_outdated = is_outdated(ms_to_be_updated);
        let status_changed = previous
            .and_then(|p| p.get(&feed.name))
            .is_some_and(|prev| prev.is_outdated != is_outdated);

        merged.insert(
            feed.name.clone(),
            FeedStatusInfo {
                is_outdated,
                ms_to_be_updated,
                status_changed,
                is_mainnet,
            },
        );
    }

    merged
}

/// Class of a network, read from any of its feed entries.
///
/// Returns `None` for an empty map, which cannot be classified.
pub fn network_class(statuses: &FeedsStatusByNetwork) -> Option<NetworkClass> {
    statuses
        .values()
        .next()
        .map(|status| NetworkClass::from_mainnet(status.is_mainnet))
}

/// Network name → per-feed statuses, held for the process lifetime.
///
/// Network names are opaque keys. Entries are only ever added or
/// overwritten; feeds that disappear from the source keep their last status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    networks: BTreeMap<String, FeedsStatusByNetwork>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// True until the first statuses are merged in.
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Number of networks tracked.
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn get(&self, network: &str) -> Option<&FeedsStatusByNetwork> {
        self.networks.get(network)
    }

    /// Merge statuses into a network's slot, overwriting feeds present in
    /// `statuses` and keeping the rest.
    pub fn merge(&mut self, network: impl Into<String>, statuses: FeedsStatusByNetwork) {
        self.networks.entry(network.into()).or_default().extend(statuses);
    }

    /// Iterate over all networks in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FeedsStatusByNetwork)> {
        self.networks.iter()
    }

    /// Networks of the given class, in name order. Empty networks are skipped.
    pub fn networks_of(
        &self,
        class: NetworkClass,
    ) -> impl Iterator<Item = (&String, &FeedsStatusByNetwork)> {
        self.networks
            .iter()
            .filter(move |(_, statuses)| network_class(statuses) == Some(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_703_160_000_000;
    const HOUR: i64 = 3_600_000;

    fn sample(name: &str, hours_ago: Option<i64>) -> FeedSample {
        FeedSample {
            name: name.to_string(),
            heartbeat_ms: HOUR,
            last_update_secs: hours_ago.map(|h| (NOW - h * HOUR) / 1000),
        }
    }

    fn config() -> MonitorConfig {
        MonitorConfig::default()
    }

    #[test]
    fn test_first_observation_is_not_a_change() {
        let statuses = update(
            "ethereum-mainnet",
            &[sample("fresh", Some(0)), sample("stale", Some(3)), sample("never", None)],
            None,
            NOW,
            &config(),
        );

        assert_eq!(statuses.len(), 3);
        assert!(!statuses["fresh"].is_outdated);
        assert!(statuses["stale"].is_outdated);
        assert!(statuses["never"].is_outdated);
        assert!(statuses.values().all(|s| !s.status_changed));
        assert!(statuses.values().all(|s| s.is_mainnet));
    }

    #[test]
    fn test_identical_observations_do_not_change() {
        let feeds = [sample("fresh", Some(0)), sample("stale", Some(3))];
        let first = update("ethereum-mainnet", &feeds, None, NOW, &config());
        let second = update("ethereum-mainnet", &feeds, Some(&first), NOW, &config());

        assert_eq!(first, second);
        assert!(second.values().all(|s| !s.status_changed));
    }

    #[test]
    fn test_flip_is_a_change() {
        let first = update("polygon-amoy", &[sample("feed", Some(0))], None, NOW, &config());
        let later = NOW + 2 * HOUR;
        let second = update("polygon-amoy", &[sample("feed", Some(0))], Some(&first), later, &config());

        let status = second["feed"];
        assert!(status.is_outdated);
        assert!(status.status_changed);
        assert!(!status.is_mainnet);

        // Still outdated on the next cycle: no longer a change.
        let third = update("polygon-amoy", &[sample("feed", Some(0))], Some(&second), later, &config());
        assert!(!third["feed"].status_changed);
    }

    #[test]
    fn test_new_feed_in_known_network_is_not_a_change() {
        let first = update("ethereum-mainnet", &[sample("a", Some(0))], None, NOW, &config());
        let second = update("ethereum-mainnet", &[sample("b", None)], Some(&first), NOW, &config());

        assert!(second["b"].is_outdated);
        assert!(!second["b"].status_changed);
    }

    #[test]
    fn test_absent_feeds_are_kept() {
        let first = update(
            "ethereum-mainnet",
            &[sample("a", Some(0)), sample("b", Some(0))],
            None,
            NOW,
            &config(),
        );
        let second = update(
            "ethereum-mainnet",
            &[sample("a", Some(5))],
            Some(&first),
            NOW,
            &config(),
        );

        assert_eq!(second.len(), 2);
        assert_eq!(second["b"], first["b"]);
        assert!(second["a"].status_changed);
    }

    #[test]
    fn test_fast_update_feeds_get_long_tolerance() {
        let config = MonitorConfig {
            fast_update_keywords: vec!["Price-".to_string()],
            ..MonitorConfig::default()
        };
        let feeds = [
            sample("Price-ETH/USD-6", Some(0)),
            sample("Random-Number", Some(0)),
        ];
        let statuses = update("ethereum-mainnet", &feeds, None, NOW, &config);

        assert_eq!(statuses["Price-ETH/USD-6"].ms_to_be_updated, HOUR + HOUR / 2);
        assert_eq!(statuses["Random-Number"].ms_to_be_updated, HOUR + HOUR / 4);
    }

    #[test]
    fn test_state_merge() {
        let mut state = State::new();
        assert!(state.is_empty());

        let first = update("ethereum-mainnet", &[sample("a", Some(0))], None, NOW, &config());
        state.merge("ethereum-mainnet", first);
        let testnet = update("polygon-amoy", &[sample("b", Some(0))], None, NOW, &config());
        state.merge("polygon-amoy", testnet);

        let second = update("ethereum-mainnet", &[sample("c", Some(0))], state.get("ethereum-mainnet"), NOW, &config());
        state.merge("ethereum-mainnet", second);

        assert_eq!(state.len(), 2);
        assert_eq!(state.get("ethereum-mainnet").unwrap().len(), 2);

        let mainnets: Vec<&String> = state.networks_of(NetworkClass::Mainnet).map(|(n, _)| n).collect();
        let testnets: Vec<&String> = state.networks_of(NetworkClass::Testnet).map(|(n, _)| n).collect();
        assert_eq!(mainnets, ["ethereum-mainnet"]);
        assert_eq!(testnets, ["polygon-amoy"]);
    }

    #[test]
    fn test_empty_network_has_no_class() {
        let mut state = State::new();
        state.merge("ghost-mainnet", FeedsStatusByNetwork::new());

        assert_eq!(network_class(state.get("ghost-mainnet").unwrap()), None);
        assert_eq!(state.networks_of(NetworkClass::Mainnet).count(), 0);
        assert_eq!(state.networks_of(NetworkClass::Testnet).count(), 0);
    }
}
