use crate::reminder::nag_loop;
use crate::shared::usecase::UseCase;
use adjutant_domain::ID;
use adjutant_infra::Context;
use tracing::info;

/// Fire path of a deferred nag-start job. The event may have been
/// deleted or may already have started while the job was pending; both
/// are quiet no-ops.
#[derive(Debug)]
pub struct StartNagUseCase {
    pub event_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait]
impl UseCase for StartNagUseCase {
    type Response = bool;

    type Error = UseCaseError;

    const NAME: &'static str = "StartNag";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let events = ctx.repos.agenda.load().await;
        let event = match events.into_iter().find(|e| e.id == self.event_id) {
            Some(event) => event,
            None => {
                info!(
                    "Nag-start job fired for event {} which no longer exists",
                    self.event_id
                );
                return Ok(false);
            }
        };

        if event.start_ts <= ctx.sys.get_timestamp_millis() {
            return Ok(false);
        }

        Ok(nag_loop::spawn(event, ctx))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::usecase::execute;
    use adjutant_domain::AgendaEvent;
    use adjutant_infra::setup_context_inmemory;

    #[tokio::test]
    async fn starts_the_loop_for_an_existing_future_event() {
        let (ctx, _job_rx) = setup_context_inmemory();
        let event = AgendaEvent::new(
            0,
            ctx.sys.get_timestamp_millis() + 60 * 60 * 1000,
            "standup".into(),
        );
        ctx.repos.agenda.save(&[event.clone()]).await.unwrap();

        let started = execute(
            StartNagUseCase {
                event_id: event.id.clone(),
            },
            &ctx,
        )
        .await
        .unwrap();

        assert!(started);
        assert!(ctx.nags.is_running(&event.id));
        ctx.nags.cancel(&event.id);
    }

    #[tokio::test]
    async fn missing_or_past_events_are_noops() {
        let (ctx, _job_rx) = setup_context_inmemory();

        let unknown = ID::new();
        let started = execute(StartNagUseCase { event_id: unknown }, &ctx)
            .await
            .unwrap();
        assert!(!started);

        let past = AgendaEvent::new(0, ctx.sys.get_timestamp_millis() - 1000, "over".into());
        ctx.repos.agenda.save(&[past.clone()]).await.unwrap();
        let started = execute(StartNagUseCase { event_id: past.id.clone() }, &ctx)
            .await
            .unwrap();
        assert!(!started);
        assert!(!ctx.nags.is_running(&past.id));
    }
}
