use actix_web::{web, HttpResponse};
use calendar_store_api_structs::get_service_health::*;
use calendar_store_infra::CalendarContext;

async fn status(ctx: web::Data<CalendarContext>) -> HttpResponse {
    let now = ctx.sys.now();
    HttpResponse::Ok().json(APIResponse {
        message: format!("Welcome to the calendar! The time is currently: {}", now),
        date_time: now,
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}
