use super::IAgendaRepo;
use crate::repos::shared::json_file::{read_json, write_json};
use adjutant_domain::AgendaEvent;
use std::path::PathBuf;
use tracing::error;

pub struct FileAgendaRepo {
    path: PathBuf,
}

impl FileAgendaRepo {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait::async_trait]
impl IAgendaRepo for FileAgendaRepo {
    async fn load(&self) -> Vec<AgendaEvent> {
        match read_json(&self.path) {
            Ok(events) => events,
            Err(e) => {
                error!("Unable to load agenda events from {:?}: {:?}", self.path, e);
                Vec::new()
            }
        }
    }

    async fn save(&self, events: &[AgendaEvent]) -> anyhow::Result<()> {
        write_json(&self.path, events)
    }
}
