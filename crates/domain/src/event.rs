use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// An `AgendaEvent` is a single dated entry in the owner's agenda. It is
/// created with a future timestamp, never edited in place and removed
/// either explicitly or by the daily stale-event cleanup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaEvent {
    pub id: ID,
    /// The chat identity that owns this event
    pub owner_id: i64,
    /// When the event takes place, in epoch milliseconds (process-local clock)
    pub start_ts: i64,
    pub description: String,
}

impl AgendaEvent {
    pub fn new(owner_id: i64, start_ts: i64, description: String) -> Self {
        Self {
            id: ID::new(),
            owner_id,
            start_ts,
            description,
        }
    }
}

impl Entity for AgendaEvent {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Which slice of the agenda a listing should cover, relative to the
/// current local date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgendaRange {
    Today,
    Tomorrow,
    /// The next seven days, today included
    Week,
    /// The current calendar month
    Month,
    All,
}
