use crate::{
    error::CalendarError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use calendar_store_api_structs::get_event_ids::*;
use calendar_store_domain::ID;
use calendar_store_infra::{CalendarContext, RepoError};

pub async fn get_event_ids_controller(
    ctx: web::Data<CalendarContext>,
) -> Result<HttpResponse, CalendarError> {
    execute(GetEventIdsUseCase {}, &ctx)
        .await
        .map(|ids| HttpResponse::Ok().json(APIResponse { ids }))
        .map_err(CalendarError::from)
}

#[derive(Debug)]
pub struct GetEventIdsUseCase {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventIdsUseCase {
    type Response = Vec<ID>;

    type Error = RepoError;

    const NAME: &'static str = "GetEventIds";

    async fn execute(&mut self, ctx: &CalendarContext) -> Result<Self::Response, Self::Error> {
        ctx.repos.events.list_ids().await
    }
}
