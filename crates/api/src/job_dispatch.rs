use crate::reminder::cleanup_stale_events::CleanupStaleEventsUseCase;
use crate::reminder::daily_digest::DailyDigestUseCase;
use crate::reminder::schedule_reminder::ScheduleReminderUseCase;
use crate::reminder::start_nag::StartNagUseCase;
use crate::shared::usecase::execute;
use adjutant_domain::{Job, JobAction, JobTrigger};
use adjutant_infra::{Context, FiredJob, JobReceiver};
use tracing::{error, info};

/// Local wall-clock time of the daily digest
const DAILY_DIGEST_AT: (u32, u32, u32) = (0, 0, 1);
/// Stale-event cleanup, offset from the digest
const CLEANUP_AT: (u32, u32, u32) = (2, 0, 0);

/// Registers the recurring jobs and spawns the task that turns fired
/// jobs into use-case executions. Each fire runs in its own task, so a
/// slow handler never delays the next fire.
pub fn start_job_dispatcher(ctx: Context, mut job_rx: JobReceiver) {
    let (hour, min, sec) = DAILY_DIGEST_AT;
    ctx.scheduler.add_job(Job {
        id: "daily_digest".to_string(),
        trigger: JobTrigger::Daily { hour, min, sec },
        action: JobAction::DailyDigest,
        misfire_grace_millis: 0,
        replace_existing: true,
    });
    let (hour, min, sec) = CLEANUP_AT;
    ctx.scheduler.add_job(Job {
        id: "cleanup_stale_events".to_string(),
        trigger: JobTrigger::Daily { hour, min, sec },
        action: JobAction::CleanupStaleEvents,
        misfire_grace_millis: 0,
        replace_existing: true,
    });

    tokio::spawn(async move {
        while let Some(job) = job_rx.recv().await {
            let ctx = ctx.clone();
            tokio::spawn(handle_fired_job(job, ctx));
        }
    });
}

/// Executes whatever a fired deferred job asks for.
pub async fn handle_fired_job(job: FiredJob, ctx: Context) {
    info!("Deferred job {} fired", job.id);
    match job.action {
        JobAction::StartNag { event_id } => {
            let _ = execute(StartNagUseCase { event_id }, &ctx).await;
        }
        JobAction::OneShotReminder { user_id, message } => {
            deliver_one_shot(user_id, &message, &ctx).await;
        }
        JobAction::DailyDigest => {
            let _ = execute(
                DailyDigestUseCase {
                    owner_id: ctx.config.owner_id,
                },
                &ctx,
            )
            .await;
        }
        JobAction::CleanupStaleEvents => {
            let _ = execute(CleanupStaleEventsUseCase, &ctx).await;
        }
    }
}

/// Both deliveries are attempted independently; one failing channel
/// must not silence the other.
async fn deliver_one_shot(user_id: i64, message: &str, ctx: &Context) {
    let text = format!("REMINDER for <@{}>: {}", user_id, message);
    if let Err(e) = ctx.notifier.notify_owner(&text).await {
        error!("Unable to deliver reminder to owner: {:?}", e);
    }
    if let Err(e) = ctx.notifier.notify_broadcast(&text).await {
        error!("Unable to deliver reminder to broadcast channel: {:?}", e);
    }
}

/// Re-issues the scheduling decision for every stored event. Runs once
/// per process start as a fire-and-forget background task; the
/// start-or-noop gate in the nag registry makes a concurrent create for
/// the same event safe.
pub fn start_reminder_rehydration(ctx: Context) {
    tokio::spawn(async move {
        info!("Scheduling event reminders on startup...");
        let events = ctx.repos.agenda.load().await;
        let count = events.len();
        for event in events {
            let _ = execute(ScheduleReminderUseCase { event }, &ctx).await;
        }
        info!("Startup reminder scheduling considered {} events", count);
    });
}

#[cfg(test)]
mod test {
    use super::*;
    use adjutant_domain::{AgendaEvent, ID};
    use adjutant_infra::{setup_context_inmemory, NotifyChannel, StubNotifier};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn one_shot_reminder_reaches_both_channels() {
        let (mut ctx, _job_rx) = setup_context_inmemory();
        let notifier = Arc::new(StubNotifier::new());
        ctx.notifier = notifier.clone();

        let job = FiredJob {
            id: "reminder_42_test".into(),
            action: JobAction::OneShotReminder {
                user_id: 42,
                message: "stretch your legs".into(),
            },
        };
        handle_fired_job(job, ctx).await;

        let sent = notifier.sent();
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().any(|m| m.channel == NotifyChannel::Owner));
        assert!(sent.iter().any(|m| m.channel == NotifyChannel::Broadcast));
        assert!(sent[0].text.contains("stretch your legs"));
    }

    #[tokio::test]
    async fn fired_nag_start_spawns_the_loop() {
        let (ctx, _job_rx) = setup_context_inmemory();
        let event = AgendaEvent::new(
            1,
            ctx.sys.get_timestamp_millis() + 60 * 60 * 1000,
            "board games".into(),
        );
        ctx.repos.agenda.save(&[event.clone()]).await.unwrap();

        let job = FiredJob {
            id: Job::start_nag_job_id(&event.id),
            action: JobAction::StartNag {
                event_id: event.id.clone(),
            },
        };
        handle_fired_job(job, ctx.clone()).await;

        assert!(ctx.nags.is_running(&event.id));
        ctx.nags.cancel(&event.id);
    }

    #[tokio::test]
    async fn fired_nag_start_for_a_deleted_event_is_a_noop() {
        let (ctx, _job_rx) = setup_context_inmemory();

        let job = FiredJob {
            id: "start_nag_gone".into(),
            action: JobAction::StartNag {
                event_id: ID::new(),
            },
        };
        handle_fired_job(job, ctx.clone()).await;

        assert_eq!(ctx.nags.running_count(), 0);
    }

    #[tokio::test]
    async fn rehydration_schedules_every_stored_event() {
        let (mut ctx, _job_rx) = setup_context_inmemory();
        ctx.config.nag_interval = Duration::from_secs(60);

        let now = ctx.sys.get_timestamp_millis();
        let imminent = AgendaEvent::new(1, now + 90 * 60 * 1000, "imminent".into());
        let passed = AgendaEvent::new(1, now - 1000, "passed".into());
        ctx.repos
            .agenda
            .save(&[imminent.clone(), passed.clone()])
            .await
            .unwrap();

        start_reminder_rehydration(ctx.clone());

        for _ in 0..100 {
            if ctx.nags.is_running(&imminent.id) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert!(ctx.nags.is_running(&imminent.id));
        assert!(!ctx.nags.is_running(&passed.id));
        ctx.nags.cancel(&imminent.id);
    }
}
