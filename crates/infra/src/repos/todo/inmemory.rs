use super::ITodoRepo;
use adjutant_domain::TodoItem;
use std::sync::Mutex;

pub struct InMemoryTodoRepo {
    items: Mutex<Vec<TodoItem>>,
}

impl InMemoryTodoRepo {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryTodoRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ITodoRepo for InMemoryTodoRepo {
    async fn load(&self) -> Vec<TodoItem> {
        self.items.lock().unwrap().clone()
    }

    async fn save(&self, items: &[TodoItem]) -> anyhow::Result<()> {
        *self.items.lock().unwrap() = items.to_vec();
        Ok(())
    }
}
