mod agenda;
mod shared;
mod todo;

pub use agenda::{FileAgendaRepo, IAgendaRepo, InMemoryAgendaRepo};
pub use todo::{FileTodoRepo, ITodoRepo, InMemoryTodoRepo};

use std::path::Path;
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub agenda: Arc<dyn IAgendaRepo>,
    pub todos: Arc<dyn ITodoRepo>,
}

impl Repos {
    pub fn create_file_backed(data_dir: &Path) -> Self {
        Self {
            agenda: Arc::new(FileAgendaRepo::new(data_dir.join("agenda.json"))),
            todos: Arc::new(FileTodoRepo::new(data_dir.join("todo.json"))),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            agenda: Arc::new(InMemoryAgendaRepo::new()),
            todos: Arc::new(InMemoryTodoRepo::new()),
        }
    }
}
