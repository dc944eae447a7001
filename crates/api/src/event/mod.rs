mod create_event;
mod delete_event;
mod get_event;
mod get_event_ids;
mod get_events;
mod get_events_by_date;
mod get_events_today;
mod update_event;

use actix_web::web;
use create_event::create_event_controller;
use delete_event::delete_event_controller;
use get_event::get_event_controller;
use get_event_ids::get_event_ids_controller;
use get_events::get_events_controller;
use get_events_by_date::get_events_by_date_controller;
use get_events_today::get_events_today_controller;
use update_event::update_event_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/today", web::get().to(get_events_today_controller));

    cfg.route("/events", web::get().to(get_events_controller));
    cfg.route("/events", web::post().to(create_event_controller));

    // Static segments have to be registered before `/events/{event_id}`
    cfg.route("/events/ids", web::get().to(get_event_ids_controller));
    cfg.route("/events/today", web::get().to(get_events_today_controller));
    cfg.route("/events/ids/{event_id}", web::get().to(get_event_controller));

    cfg.route("/events/{event_id}", web::get().to(get_event_controller));
    cfg.route("/events/{event_id}", web::put().to(update_event_controller));
    cfg.route(
        "/events/{event_id}",
        web::delete().to(delete_event_controller),
    );

    cfg.route(
        "/events/{year}/{month}/{day}",
        web::get().to(get_events_by_date_controller),
    );
}
