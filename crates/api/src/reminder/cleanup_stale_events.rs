use crate::shared::usecase::UseCase;
use adjutant_infra::Context;
use tracing::info;

/// Events older than this are pruned from the store
const STALE_AFTER_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Prunes events whose time is more than a day in the past. The store
/// is only rewritten when something was actually removed.
#[derive(Debug)]
pub struct CleanupStaleEventsUseCase;

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait]
impl UseCase for CleanupStaleEventsUseCase {
    type Response = usize;

    type Error = UseCaseError;

    const NAME: &'static str = "CleanupStaleEvents";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let threshold = ctx.sys.get_timestamp_millis() - STALE_AFTER_MILLIS;

        let events = ctx.repos.agenda.load().await;
        let retained: Vec<_> = events
            .iter()
            .filter(|e| e.start_ts >= threshold)
            .cloned()
            .collect();
        let removed = events.len() - retained.len();

        if removed > 0 {
            ctx.repos
                .agenda
                .save(&retained)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
            info!("Removed {} stale events", removed);
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::usecase::execute;
    use adjutant_domain::AgendaEvent;
    use adjutant_infra::{setup_context_inmemory, FakeSys, IAgendaRepo, InMemoryAgendaRepo};
    use std::sync::Arc;

    const NOW: i64 = 1613862000000;

    #[tokio::test]
    async fn prunes_only_events_older_than_a_day() {
        let (mut ctx, _job_rx) = setup_context_inmemory();
        ctx.sys = Arc::new(FakeSys::new(NOW));
        let agenda = Arc::new(InMemoryAgendaRepo::new());
        ctx.repos.agenda = agenda.clone();

        let two_days_ago = AgendaEvent::new(1, NOW - 2 * 24 * 60 * 60 * 1000, "ancient".into());
        let two_hours_ago = AgendaEvent::new(1, NOW - 2 * 60 * 60 * 1000, "recent".into());
        agenda
            .save(&[two_days_ago, two_hours_ago.clone()])
            .await
            .unwrap();
        assert_eq!(agenda.save_count(), 1);

        let removed = execute(CleanupStaleEventsUseCase, &ctx).await.unwrap();

        assert_eq!(removed, 1);
        // Exactly one save, with the filtered list
        assert_eq!(agenda.save_count(), 2);
        assert_eq!(agenda.load().await, vec![two_hours_ago]);
    }

    #[tokio::test]
    async fn nothing_to_remove_means_no_save() {
        let (mut ctx, _job_rx) = setup_context_inmemory();
        ctx.sys = Arc::new(FakeSys::new(NOW));
        let agenda = Arc::new(InMemoryAgendaRepo::new());
        ctx.repos.agenda = agenda.clone();

        let upcoming = AgendaEvent::new(1, NOW + 1000, "soon".into());
        agenda.save(&[upcoming]).await.unwrap();

        let removed = execute(CleanupStaleEventsUseCase, &ctx).await.unwrap();

        assert_eq!(removed, 0);
        assert_eq!(agenda.save_count(), 1);
    }
}
