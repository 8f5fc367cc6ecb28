use super::INotifier;
use serde::{Deserialize, Serialize};

pub const WEBHOOK_KEY_HEADER: &str = "adjutant-webhook-key";

#[derive(Serialize)]
struct WebhookMessage<'a> {
    content: &'a str,
}

#[derive(Deserialize)]
struct WebhookReceipt {
    message_id: String,
}

/// Delivers notifications by POSTing to the chat transport's inbound
/// webhooks. The transport answers with the id of the message it posted.
pub struct WebhookNotifier {
    client: reqwest::Client,
    owner_url: String,
    broadcast_url: String,
    key: String,
}

impl WebhookNotifier {
    pub fn new(owner_url: String, broadcast_url: String, key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            owner_url,
            broadcast_url,
            key,
        }
    }

    async fn deliver(&self, url: &str, text: &str) -> anyhow::Result<String> {
        let receipt: WebhookReceipt = self
            .client
            .post(url)
            .header(WEBHOOK_KEY_HEADER, &self.key)
            .json(&WebhookMessage { content: text })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(receipt.message_id)
    }
}

#[async_trait::async_trait]
impl INotifier for WebhookNotifier {
    async fn notify_owner(&self, text: &str) -> anyhow::Result<String> {
        self.deliver(&self.owner_url, text).await
    }

    async fn notify_broadcast(&self, text: &str) -> anyhow::Result<String> {
        self.deliver(&self.broadcast_url, text).await
    }
}
