mod file;
mod inmemory;

pub use file::FileAgendaRepo;
pub use inmemory::InMemoryAgendaRepo;

use adjutant_domain::AgendaEvent;

/// Full-list access to the agenda store. Every mutation is a
/// load-modify-save round trip; the last writer wins.
#[async_trait::async_trait]
pub trait IAgendaRepo: Send + Sync {
    /// All stored events, in insertion order. Store failures are logged
    /// and surface as an empty list.
    async fn load(&self) -> Vec<AgendaEvent>;
    async fn save(&self, events: &[AgendaEvent]) -> anyhow::Result<()>;
}
