use crate::{
    error::CalendarError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use calendar_store_api_structs::update_event::*;
use calendar_store_domain::{CalendarEvent, EventFields, ID};
use calendar_store_infra::{CalendarContext, RepoError};

pub async fn update_event_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<CalendarContext>,
) -> Result<HttpResponse, CalendarError> {
    let usecase = UpdateEventUseCase {
        event_id: path_params.event_id,
        fields: body.0.into(),
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(CalendarError::from)
}

#[derive(Debug)]
pub struct UpdateEventUseCase {
    pub event_id: ID,
    pub fields: EventFields,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateEventUseCase {
    type Response = CalendarEvent;

    type Error = RepoError;

    const NAME: &'static str = "UpdateEvent";

    async fn execute(&mut self, ctx: &CalendarContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .events
            .update(&self.event_id, self.fields.clone())
            .await
    }
}
