mod stub;
mod webhook;

pub use stub::{NotifyChannel, SentMessage, StubNotifier};
pub use webhook::WebhookNotifier;

/// Outbound notification gateway. Both channels return the message id
/// assigned by the receiving chat transport, so an acknowledgment that
/// references the delivered message can be routed back to its event.
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    async fn notify_owner(&self, text: &str) -> anyhow::Result<String>;
    async fn notify_broadcast(&self, text: &str) -> anyhow::Result<String>;
}
