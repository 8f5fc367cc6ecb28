use adjutant_domain::{format_local_time, AgendaEvent, ID};
use adjutant_infra::{Context, NagRegistry, NagTokens};
use std::sync::Arc;
use tracing::{info, warn};

/// How a nag cycle ended. Every variant converges to the same registry
/// cleanup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopOutcome {
    /// The owner acknowledged one of the notifications
    Acked,
    /// The event time arrived without an acknowledgment
    Expired,
    /// The event was deleted while the loop was running
    Cancelled,
}

/// Starts the nag cycle for an event unless one is already running for
/// it, and reports whether a new loop was spawned. The loop runs as an
/// independent task and never blocks the caller.
pub fn spawn(event: AgendaEvent, ctx: &Context) -> bool {
    let tokens = match ctx.nags.register(&event.id) {
        Some(tokens) => tokens,
        None => return false,
    };
    info!(
        "Starting nag loop for event {} ({})",
        event.id, event.description
    );
    let event_id = event.id.clone();
    let handle = tokio::spawn(run(event, ctx.clone(), tokens));
    ctx.nags.attach_handle(&event_id, handle);
    true
}

/// Removes all registry state for the event when the loop ends, no
/// matter how it ends.
struct CleanupGuard {
    nags: Arc<NagRegistry>,
    event_id: ID,
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        self.nags.forget(&self.event_id);
    }
}

async fn run(event: AgendaEvent, ctx: Context, tokens: NagTokens) {
    let _cleanup = CleanupGuard {
        nags: ctx.nags.clone(),
        event_id: event.id.clone(),
    };

    let outcome = loop {
        if ctx.sys.get_timestamp_millis() >= event.start_ts {
            break LoopOutcome::Expired;
        }
        if tokens.ack.is_cancelled() {
            break LoopOutcome::Acked;
        }
        if tokens.cancel.is_cancelled() {
            break LoopOutcome::Cancelled;
        }

        tokio::select! {
            _ = tokens.cancel.cancelled() => break LoopOutcome::Cancelled,
            _ = emit_notifications(&event, &ctx) => {}
        }

        tokio::select! {
            _ = tokens.ack.cancelled() => break LoopOutcome::Acked,
            _ = tokens.cancel.cancelled() => break LoopOutcome::Cancelled,
            _ = tokio::time::sleep(ctx.config.nag_interval) => {
                // Wait timed out without an acknowledgment, notify again
            }
        }
    };

    match outcome {
        LoopOutcome::Acked => info!("Nag loop for event {} acknowledged", event.id),
        LoopOutcome::Expired => info!("Nag loop for event {} reached the event time", event.id),
        LoopOutcome::Cancelled => info!("Nag loop for event {} cancelled", event.id),
    }
}

/// One notification cycle: both channels, both message ids recorded. A
/// failed send is logged; the loop still waits out the full interval
/// and retries on the next cycle.
async fn emit_notifications(event: &AgendaEvent, ctx: &Context) {
    let text = nag_message(event, ctx.sys.get_timestamp_millis());

    match ctx.notifier.notify_owner(&text).await {
        Ok(message_id) => ctx.nags.record_message(message_id, &event.id),
        Err(e) => warn!("Unable to send nag notification to owner: {:?}", e),
    }
    match ctx.notifier.notify_broadcast(&text).await {
        Ok(message_id) => ctx.nags.record_message(message_id, &event.id),
        Err(e) => warn!(
            "Unable to send nag notification to broadcast channel: {:?}",
            e
        ),
    }
}

fn nag_message(event: &AgendaEvent, now: i64) -> String {
    let remaining = (event.start_ts - now).max(0);
    let hours = remaining / (60 * 60 * 1000);
    let minutes = remaining % (60 * 60 * 1000) / (60 * 1000);
    format!(
        "URGENT REMINDER: {} at {}. {} hours and {} minutes remaining. Acknowledge to stop these notifications.",
        event.description,
        format_local_time(event.start_ts),
        hours,
        minutes
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use adjutant_infra::{setup_context_inmemory, StubNotifier};
    use std::time::Duration;

    fn in_two_hours(ctx: &Context) -> AgendaEvent {
        AgendaEvent::new(
            ctx.config.owner_id,
            ctx.sys.get_timestamp_millis() + 2 * 60 * 60 * 1000,
            "dentist".into(),
        )
    }

    fn test_ctx(nag_interval: Duration) -> (Context, Arc<StubNotifier>) {
        let (mut ctx, _job_rx) = setup_context_inmemory();
        ctx.config.nag_interval = nag_interval;
        let notifier = Arc::new(StubNotifier::new());
        ctx.notifier = notifier.clone();
        (ctx, notifier)
    }

    async fn wait_until_stopped(ctx: &Context, event_id: &ID) {
        for _ in 0..200 {
            if !ctx.nags.is_running(event_id) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("nag loop for {} did not stop", event_id);
    }

    #[tokio::test]
    async fn spawning_twice_keeps_a_single_loop() {
        let (ctx, _notifier) = test_ctx(Duration::from_secs(60));
        let event = in_two_hours(&ctx);

        assert!(spawn(event.clone(), &ctx));
        assert!(!spawn(event.clone(), &ctx));
        assert_eq!(ctx.nags.running_count(), 1);

        ctx.nags.cancel(&event.id);
        wait_until_stopped(&ctx, &event.id).await;
    }

    #[tokio::test]
    async fn acknowledgment_stops_the_loop_and_clears_the_registry() {
        let (ctx, notifier) = test_ctx(Duration::from_secs(60));
        let event = in_two_hours(&ctx);
        assert!(spawn(event.clone(), &ctx));

        // Wait for the first emission, then acknowledge it mid-wait
        let mut first_message_id = None;
        for _ in 0..100 {
            if let Some(sent) = notifier.sent().first() {
                first_message_id = Some(sent.message_id.clone());
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        let message_id = first_message_id.expect("loop should have notified");
        assert_eq!(ctx.nags.acknowledge(&message_id), Some(event.id.clone()));

        wait_until_stopped(&ctx, &event.id).await;
        assert!(ctx.nags.resolve_message(&message_id).is_none());
        assert_eq!(ctx.nags.running_count(), 0);
    }

    #[tokio::test]
    async fn cancellation_stops_further_notifications() {
        let (ctx, notifier) = test_ctx(Duration::from_millis(10));
        let event = in_two_hours(&ctx);
        assert!(spawn(event.clone(), &ctx));

        // Let it notify at least once
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!notifier.sent().is_empty());

        assert!(ctx.nags.cancel(&event.id));
        wait_until_stopped(&ctx, &event.id).await;

        let sent_after_cancel = notifier.sent().len();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(notifier.sent().len(), sent_after_cancel);
        assert_eq!(ctx.nags.running_count(), 0);
    }

    #[tokio::test]
    async fn loop_expires_when_the_event_time_arrives() {
        let (ctx, notifier) = test_ctx(Duration::from_millis(10));
        let event = AgendaEvent::new(
            ctx.config.owner_id,
            ctx.sys.get_timestamp_millis() + 60,
            "imminent".into(),
        );
        assert!(spawn(event.clone(), &ctx));

        wait_until_stopped(&ctx, &event.id).await;
        assert!(!notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn send_failures_keep_the_loop_alive() {
        let (ctx, notifier) = test_ctx(Duration::from_millis(10));
        notifier.set_failing(true);
        let event = in_two_hours(&ctx);
        assert!(spawn(event.clone(), &ctx));

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(ctx.nags.is_running(&event.id));
        assert!(notifier.sent().is_empty());

        // Channel comes back, the next cycle gets through
        notifier.set_failing(false);
        for _ in 0..100 {
            if !notifier.sent().is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert!(!notifier.sent().is_empty());

        ctx.nags.cancel(&event.id);
        wait_until_stopped(&ctx, &event.id).await;
    }
}
