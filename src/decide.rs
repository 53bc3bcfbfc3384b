//! Whether a cycle warrants a notification, per network class.

use feedwatch_types::NetworkClass;

use crate::status::{network_class, State};

/// Which classes should be notified this cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decision {
    pub mainnet: bool,
    pub testnet: bool,
}

impl Decision {
    /// The flag for one class.
    pub fn for_class(&self, class: NetworkClass) -> bool {
        match class {
            NetworkClass::Mainnet => self.mainnet,
            NetworkClass::Testnet => self.testnet,
        }
    }

    /// Force both classes on the first check of the process.
    pub fn with_first_check(self, first_check: bool) -> Self {
        Self {
            mainnet: first_check || self.mainnet,
            testnet: first_check || self.testnet,
        }
    }
}

/// A class needs notifying when any feed of any of its networks changed.
///
/// Empty networks cannot be classified and contribute to neither class.
pub fn decide(state: &State) -> Decision {
    state
        .iter()
        .fold(Decision::default(), |mut decision, (_, statuses)| {
            let changed = statuses.values().any(|status| status.status_changed);
            match network_class(statuses) {
                Some(NetworkClass::Mainnet) => decision.mainnet |= changed,
                Some(NetworkClass::Testnet) => decision.testnet |= changed,
                None => {}
            }
            decision
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{FeedStatusInfo, FeedsStatusByNetwork};

    fn network(is_mainnet: bool, changed: &[bool]) -> FeedsStatusByNetwork {
        changed
            .iter()
            .enumerate()
            .map(|(i, &status_changed)| {
                (
                    format!("feed-{i}"),
                    FeedStatusInfo {
                        is_outdated: false,
                        ms_to_be_updated: 1_000,
                        status_changed,
                        is_mainnet,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_state() {
        assert_eq!(decide(&State::new()), Decision::default());
    }

    #[test]
    fn test_no_changes() {
        let mut state = State::new();
        state.merge("ethereum-mainnet", network(true, &[false, false]));
        state.merge("polygon-amoy", network(false, &[false]));

        assert_eq!(decide(&state), Decision { mainnet: false, testnet: false });
    }

    #[test]
    fn test_classes_are_independent() {
        let mut state = State::new();
        state.merge("ethereum-mainnet", network(true, &[false, false]));
        state.merge("polygon-amoy", network(false, &[false, true]));
        state.merge("ethereum-sepolia", network(false, &[false]));

        let decision = decide(&state);
        assert!(!decision.for_class(NetworkClass::Mainnet));
        assert!(decision.for_class(NetworkClass::Testnet));
    }

    #[test]
    fn test_empty_network_is_ignored() {
        let mut state = State::new();
        state.merge("ghost-mainnet", FeedsStatusByNetwork::new());
        state.merge("ethereum-mainnet", network(true, &[true]));

        assert_eq!(decide(&state), Decision { mainnet: true, testnet: false });
    }

    #[test]
    fn test_first_check_forces_both() {
        let decision = Decision::default().with_first_check(true);
        assert_eq!(decision, Decision { mainnet: true, testnet: true });

        let decision = Decision { mainnet: true, testnet: false }.with_first_check(false);
        assert_eq!(decision, Decision { mainnet: true, testnet: false });
    }
}
