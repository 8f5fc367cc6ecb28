pub mod add_event;
pub mod delete_event;
pub mod get_agenda;
pub mod subscribers;

use actix_web::web;
use add_event::add_event_controller;
use delete_event::delete_event_controller;
use get_agenda::get_agenda_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/agenda/events", web::post().to(add_event_controller));
    cfg.route(
        "/agenda/events/{event_id}",
        web::delete().to(delete_event_controller),
    );
    cfg.route("/agenda", web::get().to(get_agenda_controller));
}
