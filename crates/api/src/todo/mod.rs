pub mod add_todo;
pub mod complete_todo;
pub mod delete_todo;
pub mod get_todos;

use actix_web::web;
use add_todo::add_todo_controller;
use complete_todo::complete_todo_controller;
use delete_todo::delete_todo_controller;
use get_todos::get_todos_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/todos", web::post().to(add_todo_controller));
    cfg.route("/todos", web::get().to(get_todos_controller));
    cfg.route(
        "/todos/{todo_id}/complete",
        web::post().to(complete_todo_controller),
    );
    cfg.route("/todos/{todo_id}", web::delete().to(delete_todo_controller));
}
