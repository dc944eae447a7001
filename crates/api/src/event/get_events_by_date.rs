use crate::{
    error::CalendarError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use calendar_store_api_structs::get_events_by_date::*;
use calendar_store_domain::{date_from_ymd, CalendarEvent, InvalidEventError};
use calendar_store_infra::{CalendarContext, RepoError};

fn handle_error(e: UseCaseError) -> CalendarError {
    match e {
        UseCaseError::InvalidDate(e) => CalendarError::BadClientData(e.to_string()),
        UseCaseError::Storage(e) => CalendarError::from(e),
    }
}

pub async fn get_events_by_date_controller(
    path_params: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<CalendarContext>,
) -> Result<HttpResponse, CalendarError> {
    let usecase = GetEventsByDateUseCase {
        year: path_params.year,
        month: path_params.month,
        day: path_params.day,
    };

    let id_only = query_params.id_only;
    execute(usecase, &ctx)
        .await
        .map(|events| {
            if id_only {
                HttpResponse::Ok().json(IdOnlyAPIResponse::new(events))
            } else {
                HttpResponse::Ok().json(APIResponse::new(events))
            }
        })
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetEventsByDateUseCase {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidDate(InvalidEventError),
    Storage(RepoError),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventsByDateUseCase {
    type Response = Vec<CalendarEvent>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEventsByDate";

    async fn execute(&mut self, ctx: &CalendarContext) -> Result<Self::Response, Self::Error> {
        let date =
            date_from_ymd(self.year, self.month, self.day).map_err(UseCaseError::InvalidDate)?;

        ctx.repos
            .events
            .list_by_date(date)
            .await
            .map_err(UseCaseError::Storage)
    }
}
