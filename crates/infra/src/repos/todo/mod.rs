mod file;
mod inmemory;

pub use file::FileTodoRepo;
pub use inmemory::InMemoryTodoRepo;

use adjutant_domain::TodoItem;

#[async_trait::async_trait]
pub trait ITodoRepo: Send + Sync {
    async fn load(&self) -> Vec<TodoItem>;
    async fn save(&self, items: &[TodoItem]) -> anyhow::Result<()>;
}
