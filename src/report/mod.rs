//! Human-readable status summaries.
//!
//! - [`format`]: Overdue delay strings ("2h 10m", "> 2d")
//! - [`network`]: One summary line per network ([`Color`], counts, worst delay)

pub mod format;
pub mod network;

pub use format::format_delay;
pub use network::{network_message, Color, NetworkSummary};

use feedwatch_types::NetworkClass;

use crate::status::State;

/// Summary of every network of `class`, one line per network in name order.
///
/// Returns `None` when the state holds no network of that class.
pub fn class_message(state: &State, class: NetworkClass, cap_days: i64) -> Option<String> {
    let lines: Vec<String> = state
        .networks_of(class)
        .map(|(network, statuses)| network_message(network, statuses, cap_days))
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
