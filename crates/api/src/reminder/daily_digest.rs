use crate::shared::usecase::UseCase;
use adjutant_domain::{format_local_time, local_date};
use adjutant_infra::Context;
use tracing::{info, warn};

/// Sends the owner one aggregate message with everything on today's
/// agenda, sorted by time ascending. A day without events sends
/// nothing.
#[derive(Debug)]
pub struct DailyDigestUseCase {
    pub owner_id: i64,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait]
impl UseCase for DailyDigestUseCase {
    type Response = Option<String>;

    type Error = UseCaseError;

    const NAME: &'static str = "DailyDigest";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let Some(today) = local_date(ctx.sys.get_timestamp_millis()) else {
            return Ok(None);
        };

        let mut todays_events: Vec<_> = ctx
            .repos
            .agenda
            .load()
            .await
            .into_iter()
            .filter(|e| e.owner_id == self.owner_id && local_date(e.start_ts) == Some(today))
            .collect();
        if todays_events.is_empty() {
            info!("No events scheduled for today");
            return Ok(None);
        }
        todays_events.sort_by_key(|e| e.start_ts);

        let mut message = String::from("DAILY SUMMARY! Here is your schedule for today:\n");
        for event in &todays_events {
            message.push_str(&format!(
                "- {}: {}\n",
                format_local_time(event.start_ts),
                event.description
            ));
        }

        if let Err(e) = ctx.notifier.notify_owner(&message).await {
            warn!("Unable to deliver daily digest to owner: {:?}", e);
        }
        if let Err(e) = ctx.notifier.notify_broadcast(&message).await {
            warn!("Unable to deliver daily digest to broadcast channel: {:?}", e);
        }

        Ok(Some(message))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::usecase::execute;
    use adjutant_domain::AgendaEvent;
    use adjutant_infra::{setup_context_inmemory, FakeSys, StubNotifier};
    use std::sync::Arc;

    const NOW: i64 = 1613905200000; // 2021-02-21T11:00:00Z

    #[tokio::test]
    async fn digest_lists_todays_events_sorted_by_time() {
        let (mut ctx, _job_rx) = setup_context_inmemory();
        ctx.sys = Arc::new(FakeSys::new(NOW));
        let notifier = Arc::new(StubNotifier::new());
        ctx.notifier = notifier.clone();

        let now = NOW;
        let events = vec![
            AgendaEvent::new(1, now + 2000, "later today".into()),
            AgendaEvent::new(1, now + 1000, "sooner today".into()),
            // Other owner, same day
            AgendaEvent::new(2, now + 1500, "not ours".into()),
            // Next week
            AgendaEvent::new(1, now + 7 * 24 * 60 * 60 * 1000, "far away".into()),
        ];
        ctx.repos.agenda.save(&events).await.unwrap();

        let digest = execute(DailyDigestUseCase { owner_id: 1 }, &ctx)
            .await
            .unwrap()
            .expect("digest should be sent");

        let sooner = digest.find("sooner today").unwrap();
        let later = digest.find("later today").unwrap();
        assert!(sooner < later);
        assert!(!digest.contains("not ours"));
        assert!(!digest.contains("far away"));

        // One copy to each channel
        assert_eq!(notifier.sent().len(), 2);
    }

    #[tokio::test]
    async fn empty_day_sends_nothing() {
        let (mut ctx, _job_rx) = setup_context_inmemory();
        let notifier = Arc::new(StubNotifier::new());
        ctx.notifier = notifier.clone();

        let digest = execute(DailyDigestUseCase { owner_id: 1 }, &ctx)
            .await
            .unwrap();
        assert!(digest.is_none());
        assert!(notifier.sent().is_empty());
    }
}
