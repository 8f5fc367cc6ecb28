use super::INotifier;
use anyhow::anyhow;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyChannel {
    Owner,
    Broadcast,
}

#[derive(Debug, Clone)]
pub struct SentMessage {
    pub channel: NotifyChannel,
    pub message_id: String,
    pub text: String,
}

/// Test double that records every delivery and mints sequential message
/// ids. Can be flipped into a failing state to simulate an unreachable
/// channel.
pub struct StubNotifier {
    sent: Mutex<Vec<SentMessage>>,
    counter: AtomicU64,
    failing: AtomicBool,
}

impl StubNotifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            counter: AtomicU64::new(0),
            failing: AtomicBool::new(false),
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn record(&self, channel: NotifyChannel, text: &str) -> anyhow::Result<String> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(anyhow!("notification channel unreachable"));
        }
        let message_id = format!("msg-{}", self.counter.fetch_add(1, Ordering::SeqCst) + 1);
        self.sent.lock().unwrap().push(SentMessage {
            channel,
            message_id: message_id.clone(),
            text: text.to_string(),
        });
        Ok(message_id)
    }
}

impl Default for StubNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl INotifier for StubNotifier {
    async fn notify_owner(&self, text: &str) -> anyhow::Result<String> {
        self.record(NotifyChannel::Owner, text)
    }

    async fn notify_broadcast(&self, text: &str) -> anyhow::Result<String> {
        self.record(NotifyChannel::Broadcast, text)
    }
}
