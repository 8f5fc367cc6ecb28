use crate::shared::entity::ID;

/// What the dispatcher should do when a deferred job fires.
#[derive(Debug, Clone, PartialEq)]
pub enum JobAction {
    /// Begin the nag cycle for an agenda event
    StartNag { event_id: ID },
    /// Deliver a one-shot reminder message
    OneShotReminder { user_id: i64, message: String },
    DailyDigest,
    CleanupStaleEvents,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JobTrigger {
    /// Fire once at this epoch-millisecond timestamp
    At(i64),
    /// Fire every day at this local wall-clock time
    Daily { hour: u32, min: u32, sec: u32 },
}

/// A job handed to the deferred-job scheduler. Jobs sharing an id
/// replace each other when `replace_existing` is set, so ids derived
/// from an event id never pile up across re-registrations.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: String,
    pub trigger: JobTrigger,
    pub action: JobAction,
    /// How long after the target time a missed one-shot trigger may
    /// still fire (covers short restarts)
    pub misfire_grace_millis: i64,
    pub replace_existing: bool,
}

impl Job {
    pub fn start_nag_job_id(event_id: &ID) -> String {
        format!("start_nag_{}", event_id)
    }
}
