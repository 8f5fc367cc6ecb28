use crate::reminder::nag_loop;
use crate::shared::usecase::UseCase;
use adjutant_domain::{AgendaEvent, Job, JobAction, JobTrigger};
use adjutant_infra::Context;

/// How long before an event its nag cycle begins
pub const NAG_LEAD_WINDOW_MILLIS: i64 = 2 * 60 * 60 * 1000;
/// How late a nag-start job may still fire after a restart landed past
/// its trigger
pub const NAG_START_MISFIRE_GRACE_MILLIS: i64 = 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleDecision {
    /// The event already started; nothing to do
    Past,
    /// The nag window is already open, the loop was started right away
    StartedNow,
    /// The loop start was handed to the deferred-job scheduler
    Deferred,
}

/// Decides, for a freshly created or re-hydrated event, whether its nag
/// loop starts now, later, or not at all.
#[derive(Debug)]
pub struct ScheduleReminderUseCase {
    pub event: AgendaEvent,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait]
impl UseCase for ScheduleReminderUseCase {
    type Response = ScheduleDecision;

    type Error = UseCaseError;

    const NAME: &'static str = "ScheduleReminder";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        if now >= self.event.start_ts {
            // Stale records are purged by the cleanup job, not here
            return Ok(ScheduleDecision::Past);
        }

        let notify_from = self.event.start_ts - NAG_LEAD_WINDOW_MILLIS;
        if now >= notify_from {
            nag_loop::spawn(self.event.clone(), ctx);
            return Ok(ScheduleDecision::StartedNow);
        }

        ctx.scheduler.add_job(Job {
            id: Job::start_nag_job_id(&self.event.id),
            trigger: JobTrigger::At(notify_from),
            action: JobAction::StartNag {
                event_id: self.event.id.clone(),
            },
            misfire_grace_millis: NAG_START_MISFIRE_GRACE_MILLIS,
            replace_existing: true,
        });
        Ok(ScheduleDecision::Deferred)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::usecase::execute;
    use adjutant_domain::Job;
    use adjutant_infra::{setup_context_inmemory, FakeSys, TokioJobScheduler};
    use std::sync::Arc;

    const NOW: i64 = 1613862000000;

    fn setup() -> (Context, Arc<TokioJobScheduler>) {
        let (mut ctx, _job_rx) = setup_context_inmemory();
        let sys = Arc::new(FakeSys::new(NOW));
        let (scheduler, _rx) = TokioJobScheduler::new(sys.clone());
        let scheduler = Arc::new(scheduler);
        ctx.sys = sys;
        ctx.scheduler = scheduler.clone();
        (ctx, scheduler)
    }

    fn event_at(start_ts: i64) -> AgendaEvent {
        AgendaEvent::new(0, start_ts, "an event".into())
    }

    #[tokio::test]
    async fn far_future_event_gets_a_deferred_job_and_no_loop() {
        let (ctx, scheduler) = setup();
        let event = event_at(NOW + 3 * 60 * 60 * 1000);

        let decision = execute(ScheduleReminderUseCase { event: event.clone() }, &ctx)
            .await
            .unwrap();

        assert_eq!(decision, ScheduleDecision::Deferred);
        assert!(!ctx.nags.is_running(&event.id));
        assert!(scheduler.has_job(&Job::start_nag_job_id(&event.id)));
    }

    #[tokio::test]
    async fn event_inside_the_window_starts_the_loop_immediately() {
        let (ctx, scheduler) = setup();
        let event = event_at(NOW + 90 * 60 * 1000);

        let decision = execute(ScheduleReminderUseCase { event: event.clone() }, &ctx)
            .await
            .unwrap();

        assert_eq!(decision, ScheduleDecision::StartedNow);
        assert!(ctx.nags.is_running(&event.id));
        assert!(!scheduler.has_job(&Job::start_nag_job_id(&event.id)));

        ctx.nags.cancel(&event.id);
    }

    #[tokio::test]
    async fn past_event_is_a_noop() {
        let (ctx, scheduler) = setup();
        let event = event_at(NOW - 1000);

        let decision = execute(ScheduleReminderUseCase { event: event.clone() }, &ctx)
            .await
            .unwrap();

        assert_eq!(decision, ScheduleDecision::Past);
        assert!(!ctx.nags.is_running(&event.id));
        assert!(!scheduler.has_job(&Job::start_nag_job_id(&event.id)));
    }

    #[tokio::test]
    async fn rescheduling_replaces_the_deferred_job() {
        let (ctx, scheduler) = setup();
        let event = event_at(NOW + 3 * 60 * 60 * 1000);

        for _ in 0..2 {
            let decision = execute(ScheduleReminderUseCase { event: event.clone() }, &ctx)
                .await
                .unwrap();
            assert_eq!(decision, ScheduleDecision::Deferred);
        }
        assert!(scheduler.has_job(&Job::start_nag_job_id(&event.id)));
    }
}
