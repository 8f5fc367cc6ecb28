use crate::error::ApiError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use adjutant_api_structs::complete_todo::*;
use adjutant_domain::{TodoItem, ID};
use adjutant_infra::Context;

pub async fn complete_todo_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    let usecase = CompleteTodoUseCase {
        todo_id: path_params.todo_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|item| HttpResponse::Ok().json(APIResponse::new(item)))
        .map_err(ApiError::from)
}

#[derive(Debug)]
pub struct CompleteTodoUseCase {
    pub todo_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(todo_id) => Self::NotFound(format!(
                "The to-do item with id: {}, was not found.",
                todo_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait]
impl UseCase for CompleteTodoUseCase {
    type Response = TodoItem;

    type Error = UseCaseError;

    const NAME: &'static str = "CompleteTodo";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let mut items = ctx.repos.todos.load().await;
        let item = items
            .iter_mut()
            .find(|item| item.id == self.todo_id)
            .ok_or_else(|| UseCaseError::NotFound(self.todo_id.clone()))?;

        item.done = true;
        item.done_at = Some(ctx.sys.get_timestamp_millis());
        let completed = item.clone();

        ctx.repos
            .todos
            .save(&items)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(completed)
    }
}
