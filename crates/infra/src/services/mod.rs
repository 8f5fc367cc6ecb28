mod job_scheduler;
mod notifier;

pub use job_scheduler::{FiredJob, IJobScheduler, JobReceiver, TokioJobScheduler};
pub use notifier::{INotifier, NotifyChannel, SentMessage, StubNotifier, WebhookNotifier};
