use super::subscribers::ScheduleReminderOnEventAdded;
use crate::error::ApiError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use adjutant_api_structs::add_event::*;
use adjutant_domain::AgendaEvent;
use adjutant_infra::Context;

pub async fn add_event_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    let body = body.0;
    let usecase = AddEventUseCase {
        owner_id: body.owner_id,
        start_ts: body.start_ts,
        description: body.description,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Created().json(APIResponse::new(event)))
        .map_err(ApiError::from)
}

#[derive(Debug)]
pub struct AddEventUseCase {
    pub owner_id: i64,
    pub start_ts: i64,
    pub description: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    PastStartTime,
    StorageError,
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::PastStartTime => {
                Self::BadClientData("Cannot add an event in the past".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait]
impl UseCase for AddEventUseCase {
    type Response = AgendaEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "AddEvent";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if self.start_ts <= ctx.sys.get_timestamp_millis() {
            return Err(UseCaseError::PastStartTime);
        }

        let e = AgendaEvent::new(self.owner_id, self.start_ts, self.description.clone());

        let mut events = ctx.repos.agenda.load().await;
        events.push(e.clone());
        ctx.repos
            .agenda
            .save(&events)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(e)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(ScheduleReminderOnEventAdded)]
    }
}
