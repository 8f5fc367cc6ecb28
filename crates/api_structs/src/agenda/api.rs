use crate::dtos::AgendaEventDTO;
use adjutant_domain::{AgendaEvent, AgendaRange, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaEventResponse {
    pub event: AgendaEventDTO,
}

impl AgendaEventResponse {
    pub fn new(event: AgendaEvent) -> Self {
        Self {
            event: AgendaEventDTO::new(event),
        }
    }
}

pub mod add_event {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub owner_id: i64,
        pub start_ts: i64,
        pub description: String,
    }

    pub type APIResponse = AgendaEventResponse;
}

pub mod delete_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = AgendaEventResponse;
}

pub mod get_agenda {
    use super::*;

    #[derive(Serialize, Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub owner_id: i64,
        pub range: AgendaRange,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub events: Vec<AgendaEventDTO>,
    }

    impl APIResponse {
        pub fn new(events: Vec<AgendaEvent>) -> Self {
            Self {
                events: events.into_iter().map(AgendaEventDTO::new).collect(),
            }
        }
    }
}
