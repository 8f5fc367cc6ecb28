use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// A single to-do entry. Completion keeps the record around with a
/// `done_at` timestamp instead of deleting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: ID,
    pub owner_id: i64,
    pub text: String,
    pub created_ts: i64,
    pub done: bool,
    pub done_at: Option<i64>,
}

impl TodoItem {
    pub fn new(owner_id: i64, text: String, created_ts: i64) -> Self {
        Self {
            id: ID::new(),
            owner_id,
            text,
            created_ts,
            done: false,
            done_at: None,
        }
    }
}

impl Entity for TodoItem {
    fn id(&self) -> &ID {
        &self.id
    }
}
