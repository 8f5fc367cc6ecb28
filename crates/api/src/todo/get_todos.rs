use crate::error::ApiError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use adjutant_api_structs::get_todos::*;
use adjutant_domain::TodoItem;
use adjutant_infra::Context;

pub async fn get_todos_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    let usecase = GetTodosUseCase {
        owner_id: query_params.owner_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|items| HttpResponse::Ok().json(APIResponse::new(items)))
        .map_err(|_| ApiError::InternalError)
}

#[derive(Debug)]
pub struct GetTodosUseCase {
    pub owner_id: i64,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait]
impl UseCase for GetTodosUseCase {
    type Response = Vec<TodoItem>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetTodos";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let items = ctx
            .repos
            .todos
            .load()
            .await
            .into_iter()
            .filter(|item| item.owner_id == self.owner_id)
            .collect();
        Ok(items)
    }
}
