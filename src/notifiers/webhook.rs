use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use super::Notifier;
use crate::config::WebhookConfig;
use crate::Result;

/// Posts the celebration URL to a Discord-compatible webhook.
pub struct WebhookNotifier {
    client: Client,
    webhook_url: String,
    username: Option<String>,
}

impl WebhookNotifier {
    /// Returns `None` when no webhook URL is configured.
    pub fn from_config(config: &WebhookConfig) -> Option<Self> {
        config.url.as_ref().map(|url| WebhookNotifier {
            client: Client::new(),
            webhook_url: url.clone(),
            username: config.username.clone(),
        })
    }

    fn create_payload(&self, url: &str) -> serde_json::Value {
        let mut payload = json!({
            "content": url,
        });

        if let Some(username) = &self.username {
            payload["username"] = json!(username);
        }

        payload
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, url: &str) -> Result<()> {
        let payload = self.create_payload(url);

        self.client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
