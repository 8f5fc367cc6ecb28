use crate::error::ApiError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use adjutant_api_structs::get_agenda::*;
use adjutant_domain::{local_date, AgendaEvent, AgendaRange};
use adjutant_infra::Context;
use chrono::Datelike;

pub async fn get_agenda_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    let usecase = GetAgendaUseCase {
        owner_id: query_params.owner_id,
        range: query_params.range,
    };

    execute(usecase, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(APIResponse::new(events)))
        .map_err(|_| ApiError::InternalError)
}

/// Lists the owner's events inside the requested range, sorted by start
/// time.
#[derive(Debug)]
pub struct GetAgendaUseCase {
    pub owner_id: i64,
    pub range: AgendaRange,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait]
impl UseCase for GetAgendaUseCase {
    type Response = Vec<AgendaEvent>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetAgenda";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let Some(today) = local_date(ctx.sys.get_timestamp_millis()) else {
            return Ok(Vec::new());
        };

        let range = self.range;
        let mut events: Vec<_> = ctx
            .repos
            .agenda
            .load()
            .await
            .into_iter()
            .filter(|e| e.owner_id == self.owner_id)
            .filter(|e| match local_date(e.start_ts) {
                Some(date) => match range {
                    AgendaRange::Today => date == today,
                    AgendaRange::Tomorrow => Some(date) == today.succ_opt(),
                    AgendaRange::Week => {
                        let days_ahead = date.signed_duration_since(today).num_days();
                        (0..7).contains(&days_ahead)
                    }
                    AgendaRange::Month => {
                        date.year() == today.year() && date.month() == today.month()
                    }
                    AgendaRange::All => true,
                },
                None => false,
            })
            .collect();
        events.sort_by_key(|e| e.start_ts);

        Ok(events)
    }
}
