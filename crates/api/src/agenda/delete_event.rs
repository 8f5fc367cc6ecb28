use super::subscribers::CancelNagOnEventDeleted;
use crate::error::ApiError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use adjutant_api_structs::delete_event::*;
use adjutant_domain::{AgendaEvent, ID};
use adjutant_infra::Context;

pub async fn delete_event_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    let usecase = DeleteEventUseCase {
        event_id: path_params.event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(ApiError::from)
}

#[derive(Debug)]
pub struct DeleteEventUseCase {
    pub event_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => Self::NotFound(format!(
                "The agenda event with id: {}, was not found.",
                event_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait]
impl UseCase for DeleteEventUseCase {
    type Response = AgendaEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteEvent";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let mut events = ctx.repos.agenda.load().await;
        let position = events
            .iter()
            .position(|e| e.id == self.event_id)
            .ok_or_else(|| UseCaseError::NotFound(self.event_id.clone()))?;
        let removed = events.remove(position);

        ctx.repos
            .agenda
            .save(&events)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(removed)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(CancelNagOnEventDeleted)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use adjutant_infra::setup_context_inmemory;

    #[tokio::test]
    async fn removes_the_event_from_the_store() {
        let (ctx, _job_rx) = setup_context_inmemory();
        let keep = AgendaEvent::new(1, ctx.sys.get_timestamp_millis() + 1000, "keep".into());
        let remove = AgendaEvent::new(1, ctx.sys.get_timestamp_millis() + 2000, "remove".into());
        ctx.repos
            .agenda
            .save(&[keep.clone(), remove.clone()])
            .await
            .unwrap();

        let deleted = execute(
            DeleteEventUseCase {
                event_id: remove.id.clone(),
            },
            &ctx,
        )
        .await
        .unwrap();

        assert_eq!(deleted, remove);
        assert_eq!(ctx.repos.agenda.load().await, vec![keep]);
    }

    #[tokio::test]
    async fn unknown_event_is_an_error() {
        let (ctx, _job_rx) = setup_context_inmemory();

        let res = execute(
            DeleteEventUseCase {
                event_id: ID::new(),
            },
            &ctx,
        )
        .await;
        assert!(res.is_err());
    }
}
