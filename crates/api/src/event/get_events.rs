use crate::{
    error::CalendarError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use calendar_store_api_structs::get_events::*;
use calendar_store_domain::CalendarEvent;
use calendar_store_infra::{CalendarContext, RepoError};

pub async fn get_events_controller(
    ctx: web::Data<CalendarContext>,
) -> Result<HttpResponse, CalendarError> {
    execute(GetEventsUseCase {}, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(APIResponse::new(events)))
        .map_err(CalendarError::from)
}

#[derive(Debug)]
pub struct GetEventsUseCase {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventsUseCase {
    type Response = Vec<CalendarEvent>;

    type Error = RepoError;

    const NAME: &'static str = "GetEvents";

    async fn execute(&mut self, ctx: &CalendarContext) -> Result<Self::Response, Self::Error> {
        ctx.repos.events.list_all().await
    }
}
