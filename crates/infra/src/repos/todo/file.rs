use super::ITodoRepo;
use crate::repos::shared::json_file::{read_json, write_json};
use adjutant_domain::TodoItem;
use std::path::PathBuf;
use tracing::error;

pub struct FileTodoRepo {
    path: PathBuf,
}

impl FileTodoRepo {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait::async_trait]
impl ITodoRepo for FileTodoRepo {
    async fn load(&self) -> Vec<TodoItem> {
        match read_json(&self.path) {
            Ok(items) => items,
            Err(e) => {
                error!("Unable to load to-do items from {:?}: {:?}", self.path, e);
                Vec::new()
            }
        }
    }

    async fn save(&self, items: &[TodoItem]) -> anyhow::Result<()> {
        write_json(&self.path, items)
    }
}
