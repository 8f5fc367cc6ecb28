use adjutant_domain::ID;
use serde::{Deserialize, Serialize};

pub mod acknowledge_reminder {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        /// Id of the notification message the actor reacted to
        pub message_id: String,
        pub actor_id: i64,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        /// The event whose nag cycle was stopped, when the signal
        /// matched one
        pub acked_event_id: Option<ID>,
    }
}

pub mod remind_me {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub user_id: i64,
        /// Delay expression such as `30s`, `10m`, `2h` or `1d`
        pub delay: String,
        pub message: String,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        /// When the reminder will fire, in epoch milliseconds
        pub scheduled_at: i64,
    }
}
