use crate::system::ISys;
use adjutant_domain::{to_local, Job, JobAction, JobTrigger};
use chrono::{DateTime, Local, NaiveDate};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// A job whose trigger has elapsed, handed to the dispatcher over the
/// fire channel.
#[derive(Debug, Clone)]
pub struct FiredJob {
    pub id: String,
    pub action: JobAction,
}

pub type JobReceiver = UnboundedReceiver<FiredJob>;

pub trait IJobScheduler: Send + Sync {
    /// Registers a job. A job sharing an id with a pending one replaces
    /// it when `replace_existing` is set and is ignored otherwise.
    fn add_job(&self, job: Job);
}

struct PendingJob {
    generation: u64,
    handle: JoinHandle<()>,
}

/// Deferred-job scheduler backed by plain tokio timers. Fired jobs are
/// not executed here; they are pushed onto the fire channel and the
/// consumer decides what a fire means.
pub struct TokioJobScheduler {
    sys: Arc<dyn ISys>,
    tx: UnboundedSender<FiredJob>,
    pending: Arc<Mutex<HashMap<String, PendingJob>>>,
    generation: AtomicU64,
}

impl TokioJobScheduler {
    pub fn new(sys: Arc<dyn ISys>) -> (Self, JobReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                sys,
                tx,
                pending: Arc::new(Mutex::new(HashMap::new())),
                generation: AtomicU64::new(0),
            },
            rx,
        )
    }

    /// Whether a one-shot job with this id is still waiting to fire
    pub fn has_job(&self, id: &str) -> bool {
        self.pending.lock().unwrap().contains_key(id)
    }
}

impl IJobScheduler for TokioJobScheduler {
    fn add_job(&self, job: Job) {
        let mut pending = self.pending.lock().unwrap();
        if let Some(existing) = pending.remove(&job.id) {
            if !job.replace_existing {
                warn!("Job {} is already registered, ignoring duplicate", job.id);
                pending.insert(job.id, existing);
                return;
            }
            existing.handle.abort();
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst);
        let id = job.id.clone();
        let handle = tokio::spawn(run_job(
            job,
            self.sys.clone(),
            self.tx.clone(),
            self.pending.clone(),
            generation,
        ));
        pending.insert(id, PendingJob { generation, handle });
    }
}

async fn run_job(
    job: Job,
    sys: Arc<dyn ISys>,
    tx: UnboundedSender<FiredJob>,
    pending: Arc<Mutex<HashMap<String, PendingJob>>>,
    generation: u64,
) {
    match job.trigger {
        JobTrigger::At(target) => {
            let now = sys.get_timestamp_millis();
            if target > now {
                tokio::time::sleep(Duration::from_millis((target - now) as u64)).await;
                let _ = tx.send(FiredJob {
                    id: job.id.clone(),
                    action: job.action,
                });
            } else if now - target <= job.misfire_grace_millis {
                info!(
                    "Job {} missed its trigger by {}ms, firing within the grace window",
                    job.id,
                    now - target
                );
                let _ = tx.send(FiredJob {
                    id: job.id.clone(),
                    action: job.action,
                });
            } else {
                warn!(
                    "Job {} missed its trigger beyond the grace window, dropping it",
                    job.id
                );
            }

            // Unregister, unless a replacement took the slot in the meantime
            let mut pending = pending.lock().unwrap();
            if pending.get(&job.id).map(|p| p.generation) == Some(generation) {
                pending.remove(&job.id);
            }
        }
        JobTrigger::Daily { hour, min, sec } => loop {
            let now = to_local(sys.get_timestamp_millis()).unwrap_or_else(Local::now);
            let wait = millis_until_next_daily(now, hour, min, sec);
            tokio::time::sleep(Duration::from_millis(wait)).await;
            if tx
                .send(FiredJob {
                    id: job.id.clone(),
                    action: job.action.clone(),
                })
                .is_err()
            {
                // Dispatcher is gone, nothing left to fire for
                break;
            }
        },
    }
}

fn local_at(date: NaiveDate, hour: u32, min: u32, sec: u32) -> Option<DateTime<Local>> {
    date.and_hms_opt(hour, min, sec)?
        .and_local_timezone(Local)
        .earliest()
}

/// Milliseconds until the next occurrence of the given local wall-clock
/// time, strictly in the future.
fn millis_until_next_daily(now: DateTime<Local>, hour: u32, min: u32, sec: u32) -> u64 {
    let next = local_at(now.date_naive(), hour, min, sec)
        .filter(|candidate| *candidate > now)
        .or_else(|| {
            now.date_naive()
                .succ_opt()
                .and_then(|tomorrow| local_at(tomorrow, hour, min, sec))
        });

    match next {
        Some(next) => (next - now).num_milliseconds().max(1) as u64,
        // DST gap on both days; skip a day rather than spin
        None => 24 * 60 * 60 * 1000,
    }
}
