use super::IAgendaRepo;
use adjutant_domain::AgendaEvent;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub struct InMemoryAgendaRepo {
    events: Mutex<Vec<AgendaEvent>>,
    save_calls: AtomicUsize,
}

impl InMemoryAgendaRepo {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            save_calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `save` has been invoked
    pub fn save_count(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryAgendaRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IAgendaRepo for InMemoryAgendaRepo {
    async fn load(&self) -> Vec<AgendaEvent> {
        self.events.lock().unwrap().clone()
    }

    async fn save(&self, events: &[AgendaEvent]) -> anyhow::Result<()> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        *self.events.lock().unwrap() = events.to_vec();
        Ok(())
    }
}
