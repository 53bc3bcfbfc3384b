//! Slack delivery, one channel per network class.

use async_trait::async_trait;
use feedwatch_adapters::slack::SlackClient;
use feedwatch_types::NetworkClass;

use super::{Notifier, NotifyError};
use crate::config::MonitorConfig;

/// Posts summaries to the Slack channel configured for each class.
#[derive(Debug, Clone)]
pub struct SlackNotifier {
    client: SlackClient,
    mainnet_channel: Option<String>,
    testnet_channel: Option<String>,
}

impl SlackNotifier {
    /// Create a notifier with explicit channel ids.
    pub fn new(
        client: SlackClient,
        mainnet_channel: Option<String>,
        testnet_channel: Option<String>,
    ) -> Self {
        Self {
            client,
            mainnet_channel,
            testnet_channel,
        }
    }

    /// Create a notifier using the channels from the monitor configuration.
    pub fn from_config(client: SlackClient, config: &MonitorConfig) -> Self {
        Self::new(
            client,
            config.channel(NetworkClass::Mainnet).map(str::to_string),
            config.channel(NetworkClass::Testnet).map(str::to_string),
        )
    }

    fn channel(&self, class: NetworkClass) -> Result<&str, NotifyError> {
        match class {
            NetworkClass::Mainnet => self.mainnet_channel.as_deref(),
            NetworkClass::Testnet => self.testnet_channel.as_deref(),
        }
        .ok_or(NotifyError::MissingChannel(class))
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn send(&self, class: NetworkClass, text: &str) -> Result<(), NotifyError> {
        let channel = self.channel(class)?;
        self.client.post_message(channel, text).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SlackClient {
        SlackClient::builder().token("xoxb-test").build().unwrap()
    }

    #[test]
    fn test_channels_from_config() {
        let config = MonitorConfig {
            mainnet_channel: Some("C-MAIN".to_string()),
            testnet_channel: Some(" ".to_string()),
            ..MonitorConfig::default()
        };
        let notifier = SlackNotifier::from_config(client(), &config);

        assert_eq!(notifier.channel(NetworkClass::Mainnet).unwrap(), "C-MAIN");
        assert!(matches!(
            notifier.channel(NetworkClass::Testnet),
            Err(NotifyError::MissingChannel(NetworkClass::Testnet))
        ));
    }

    #[tokio::test]
    async fn test_missing_channel_fails_before_any_request() {
        let notifier = SlackNotifier::new(client(), None, None);

        let err = notifier.send(NetworkClass::Mainnet, "text").await.unwrap_err();
        assert_eq!(err.to_string(), "no channel configured for mainnet");
    }
}
