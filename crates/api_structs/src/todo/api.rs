use crate::dtos::TodoItemDTO;
use adjutant_domain::{TodoItem, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemResponse {
    pub item: TodoItemDTO,
}

impl TodoItemResponse {
    pub fn new(item: TodoItem) -> Self {
        Self {
            item: TodoItemDTO::new(item),
        }
    }
}

pub mod add_todo {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub owner_id: i64,
        pub text: String,
    }

    pub type APIResponse = TodoItemResponse;
}

pub mod get_todos {
    use super::*;

    #[derive(Serialize, Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub owner_id: i64,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub items: Vec<TodoItemDTO>,
    }

    impl APIResponse {
        pub fn new(items: Vec<TodoItem>) -> Self {
            Self {
                items: items.into_iter().map(TodoItemDTO::new).collect(),
            }
        }
    }
}

pub mod complete_todo {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub todo_id: ID,
    }

    pub type APIResponse = TodoItemResponse;
}

pub mod delete_todo {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub todo_id: ID,
    }

    pub type APIResponse = TodoItemResponse;
}
