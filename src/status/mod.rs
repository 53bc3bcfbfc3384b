//! Staleness computation and status tracking across polling cycles.
//!
//! ## Submodules
//!
//! - [`delay`]: Time left before a feed is late, and the outdated check
//! - [`sample`]: Conversion of wire feeds into heartbeat / last-update numbers
//! - [`tracker`]: Per-feed status records and the process-lifetime [`State`]
//!
//! ## Data Flow
//!
//! ```text
//! Feed (wire strings)
//!        │
//!        ▼
//! FeedSample::try_from()  ──▶ ConversionError (feed skipped)
//!        │
//!        ▼
//! tracker::update()  (delay + outdated + change vs. previous cycle)
//!        │
//!        ▼
//! State::merge()
//! ```

pub mod delay;
pub mod sample;
pub mod tracker;

pub use delay::{admissible_delay, is_outdated, ms_to_be_updated, MS_PER_DAY};
pub use sample::{ConversionError, FeedSample};
pub use tracker::{network_class, update, FeedStatusInfo, FeedsStatusByNetwork, State};
