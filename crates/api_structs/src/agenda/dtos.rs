use adjutant_domain::{AgendaEvent, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AgendaEventDTO {
    pub id: ID,
    pub owner_id: i64,
    pub start_ts: i64,
    pub description: String,
}

impl AgendaEventDTO {
    pub fn new(event: AgendaEvent) -> Self {
        Self {
            id: event.id,
            owner_id: event.owner_id,
            start_ts: event.start_ts,
            description: event.description,
        }
    }
}
