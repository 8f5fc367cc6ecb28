use adjutant_domain::ID;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Tokens handed to a newly registered nag loop.
#[derive(Clone)]
pub struct NagTokens {
    /// Set when the owner acknowledges any notification of this loop
    pub ack: CancellationToken,
    /// Set when the event is deleted while its loop is running
    pub cancel: CancellationToken,
}

struct LoopEntry {
    tokens: NagTokens,
    handle: Option<JoinHandle<()>>,
}

#[derive(Default)]
struct Inner {
    loops: HashMap<ID, LoopEntry>,
    /// Every notification message a loop has emitted, mapped back to
    /// its event so a reaction to any of them resolves the right loop
    message_index: HashMap<String, ID>,
}

/// In-memory bookkeeping for live nag loops: which events have one, how
/// to wake or cancel them, and which emitted messages belong to which
/// event. All pieces for an event are inserted and removed under one
/// lock, so an acknowledgment signal either observes a live loop or
/// nothing at all.
#[derive(Default)]
pub struct NagRegistry {
    inner: Mutex<Inner>,
}

impl NagRegistry {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_running(&self, event_id: &ID) -> bool {
        self.inner.lock().unwrap().loops.contains_key(event_id)
    }

    /// Registers a loop for the event, or `None` when one is already
    /// live. Registration is the gate that keeps loops unique per event.
    pub fn register(&self, event_id: &ID) -> Option<NagTokens> {
        let mut inner = self.inner.lock().unwrap();
        if inner.loops.contains_key(event_id) {
            return None;
        }
        let tokens = NagTokens {
            ack: CancellationToken::new(),
            cancel: CancellationToken::new(),
        };
        inner.loops.insert(
            event_id.clone(),
            LoopEntry {
                tokens: tokens.clone(),
                handle: None,
            },
        );
        Some(tokens)
    }

    /// Stores the join handle of a spawned loop. A loop that already
    /// finished has removed its entry; the late handle is then dropped.
    pub fn attach_handle(&self, event_id: &ID, handle: JoinHandle<()>) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(entry) = inner.loops.get_mut(event_id) {
            entry.handle = Some(handle);
        }
    }

    pub fn ack_flag(&self, event_id: &ID) -> Option<CancellationToken> {
        self.inner
            .lock()
            .unwrap()
            .loops
            .get(event_id)
            .map(|entry| entry.tokens.ack.clone())
    }

    /// Records an emitted notification message, unless the loop already
    /// cleaned itself up.
    pub fn record_message(&self, message_id: String, event_id: &ID) {
        let mut inner = self.inner.lock().unwrap();
        if inner.loops.contains_key(event_id) {
            inner.message_index.insert(message_id, event_id.clone());
        }
    }

    pub fn resolve_message(&self, message_id: &str) -> Option<ID> {
        self.inner
            .lock()
            .unwrap()
            .message_index
            .get(message_id)
            .cloned()
    }

    /// Resolves a message to its event and sets the ack flag, all under
    /// one lock acquisition. Idempotent; unknown messages resolve to
    /// `None` and nothing happens.
    pub fn acknowledge(&self, message_id: &str) -> Option<ID> {
        let inner = self.inner.lock().unwrap();
        let event_id = inner.message_index.get(message_id)?.clone();
        if let Some(entry) = inner.loops.get(&event_id) {
            entry.tokens.ack.cancel();
        }
        Some(event_id)
    }

    /// Requests cancellation of a live loop. The loop observes the
    /// token, stops emitting and runs its own cleanup.
    pub fn cancel(&self, event_id: &ID) -> bool {
        let inner = self.inner.lock().unwrap();
        match inner.loops.get(event_id) {
            Some(entry) => {
                entry.tokens.cancel.cancel();
                true
            }
            None => false,
        }
    }

    /// Removes every trace of the event: tokens, handle and all reverse
    /// index entries.
    pub fn forget(&self, event_id: &ID) {
        let mut inner = self.inner.lock().unwrap();
        inner.loops.remove(event_id);
        inner.message_index.retain(|_, id| id != event_id);
    }

    /// Shutdown path: cancels every live loop and aborts the tasks so
    /// none outlives the process teardown. Each aborted loop still runs
    /// its cleanup guard.
    pub fn cancel_all(&self) {
        let inner = self.inner.lock().unwrap();
        for entry in inner.loops.values() {
            entry.tokens.cancel.cancel();
            if let Some(handle) = &entry.handle {
                handle.abort();
            }
        }
    }

    pub fn running_count(&self) -> usize {
        self.inner.lock().unwrap().loops.len()
    }
}
