pub mod acknowledge;
pub mod cleanup_stale_events;
pub mod daily_digest;
pub mod nag_loop;
pub mod remind_me;
pub mod schedule_reminder;
pub mod start_nag;

use acknowledge::acknowledge_reminder_controller;
use actix_web::web;
use remind_me::remind_me_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders", web::post().to(remind_me_controller));
    cfg.route(
        "/reminders/ack",
        web::post().to(acknowledge_reminder_controller),
    );
}
