//! Notification delivery abstraction.
//!
//! A [`Notifier`] delivers one finished summary text to the channel of a
//! network class. Delivery failures are reported back to the caller, which
//! logs them; nothing here retries.

mod log;
#[cfg(feature = "http")]
mod slack;

pub use self::log::LogNotifier;
#[cfg(feature = "http")]
pub use self::slack::SlackNotifier;

use std::fmt::Debug;

use async_trait::async_trait;
use feedwatch_types::NetworkClass;
use thiserror::Error;

/// Errors a notifier can fail with.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("no channel configured for {0}")]
    MissingChannel(NetworkClass),

    #[cfg(feature = "http")]
    #[error(transparent)]
    Adapter(#[from] feedwatch_adapters::AdapterError),
}

/// Trait for delivering summaries to a per-class channel.
#[async_trait]
pub trait Notifier: Send + Sync + Debug {
    /// Deliver `text` to the channel for `class`.
    async fn send(&self, class: NetworkClass, text: &str) -> Result<(), NotifyError>;
}
