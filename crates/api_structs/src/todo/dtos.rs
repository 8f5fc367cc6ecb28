use adjutant_domain::{TodoItem, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemDTO {
    pub id: ID,
    pub owner_id: i64,
    pub text: String,
    pub created_ts: i64,
    pub done: bool,
    pub done_at: Option<i64>,
}

impl TodoItemDTO {
    pub fn new(item: TodoItem) -> Self {
        Self {
            id: item.id,
            owner_id: item.owner_id,
            text: item.text,
            created_ts: item.created_ts,
            done: item.done,
            done_at: item.done_at,
        }
    }
}
