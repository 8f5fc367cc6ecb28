use crate::error::ApiError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use adjutant_api_structs::add_todo::*;
use adjutant_domain::TodoItem;
use adjutant_infra::Context;

pub async fn add_todo_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    let body = body.0;
    let usecase = AddTodoUseCase {
        owner_id: body.owner_id,
        text: body.text,
    };

    execute(usecase, &ctx)
        .await
        .map(|item| HttpResponse::Created().json(APIResponse::new(item)))
        .map_err(ApiError::from)
}

#[derive(Debug)]
pub struct AddTodoUseCase {
    pub owner_id: i64,
    pub text: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait]
impl UseCase for AddTodoUseCase {
    type Response = TodoItem;

    type Error = UseCaseError;

    const NAME: &'static str = "AddTodo";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let item = TodoItem::new(
            self.owner_id,
            self.text.clone(),
            ctx.sys.get_timestamp_millis(),
        );

        let mut items = ctx.repos.todos.load().await;
        items.push(item.clone());
        ctx.repos
            .todos
            .save(&items)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(item)
    }
}
