use super::{add_event::AddEventUseCase, delete_event::DeleteEventUseCase};
use crate::reminder::schedule_reminder::ScheduleReminderUseCase;
use crate::shared::usecase::{execute, Subscriber};
use adjutant_domain::AgendaEvent;
use adjutant_infra::Context;
use tracing::info;

pub struct ScheduleReminderOnEventAdded;

#[async_trait::async_trait]
impl Subscriber<AddEventUseCase> for ScheduleReminderOnEventAdded {
    async fn notify(&self, e: &AgendaEvent, ctx: &Context) {
        let schedule_reminder = ScheduleReminderUseCase { event: e.clone() };

        // Sideeffect, ignore result
        let _ = execute(schedule_reminder, ctx).await;
    }
}

pub struct CancelNagOnEventDeleted;

#[async_trait::async_trait]
impl Subscriber<DeleteEventUseCase> for CancelNagOnEventDeleted {
    async fn notify(&self, e: &AgendaEvent, ctx: &Context) {
        if ctx.nags.cancel(&e.id) {
            info!("Cancelled active nag loop for deleted event {}", e.id);
        }
    }
}
