use crate::error::ApiError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use adjutant_api_structs::acknowledge_reminder::*;
use adjutant_domain::ID;
use adjutant_infra::Context;
use tracing::info;

pub async fn acknowledge_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    let body = body.0;
    let usecase = AcknowledgeReminderUseCase {
        message_id: body.message_id,
        actor_id: body.actor_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|acked_event_id| HttpResponse::Ok().json(APIResponse { acked_event_id }))
        .map_err(|_| ApiError::InternalError)
}

/// Maps an external acknowledgment signal (a reaction to one of the nag
/// messages) back to its event and sets the ack flag. Signals from
/// anyone but the configured owner, and signals for unknown or stale
/// messages, are silently ignored.
#[derive(Debug)]
pub struct AcknowledgeReminderUseCase {
    pub message_id: String,
    pub actor_id: i64,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait]
impl UseCase for AcknowledgeReminderUseCase {
    type Response = Option<ID>;

    type Error = UseCaseError;

    const NAME: &'static str = "AcknowledgeReminder";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if self.actor_id != ctx.config.owner_id {
            return Ok(None);
        }

        let acked = ctx.nags.acknowledge(&self.message_id);
        if let Some(event_id) = &acked {
            info!("Reminder for event {} confirmed and stopped", event_id);
        }
        Ok(acked)
    }
}
