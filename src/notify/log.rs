//! Notifier that writes summaries to the log instead of delivering them.

use async_trait::async_trait;
use feedwatch_types::NetworkClass;
use tracing::info;

use super::{Notifier, NotifyError};

/// Logs every summary at info level. Used for dry runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, class: NetworkClass, text: &str) -> Result<(), NotifyError> {
        info!(class = %class, "status summary:\n{}", text);
        Ok(())
    }
}
