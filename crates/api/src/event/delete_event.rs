use crate::{
    error::CalendarError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use calendar_store_api_structs::delete_event::*;
use calendar_store_domain::{CalendarEvent, ID};
use calendar_store_infra::{CalendarContext, RepoError};

pub async fn delete_event_controller(
    path_params: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<CalendarContext>,
) -> Result<HttpResponse, CalendarError> {
    let usecase = DeleteEventUseCase {
        event_id: path_params.event_id,
    };

    let should_return = query_params.should_return;
    execute(usecase, &ctx)
        .await
        .map(|event| {
            if should_return {
                HttpResponse::Ok().json(APIResponse::new(Some(event)))
            } else {
                HttpResponse::NoContent().finish()
            }
        })
        .map_err(CalendarError::from)
}

#[derive(Debug)]
pub struct DeleteEventUseCase {
    pub event_id: ID,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteEventUseCase {
    type Response = CalendarEvent;

    type Error = RepoError;

    const NAME: &'static str = "DeleteEvent";

    async fn execute(&mut self, ctx: &CalendarContext) -> Result<Self::Response, Self::Error> {
        ctx.repos.events.delete(&self.event_id).await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use calendar_store_domain::EventFields;
    use chrono::NaiveDate;

    #[actix_web::test]
    async fn deletes_event() {
        let ctx = CalendarContext::create_inmemory();
        let date = NaiveDate::from_ymd_opt(2025, 8, 22).unwrap();
        let event_id = ctx
            .repos
            .events
            .create(EventFields::new(date, "Walk the dog"))
            .await
            .unwrap();

        let mut usecase = DeleteEventUseCase { event_id };
        let deleted = usecase.execute(&ctx).await.unwrap();
        assert_eq!(deleted.id, event_id);
        assert_eq!(
            ctx.repos.events.get(&event_id).await,
            Err(RepoError::NotFound(event_id))
        );

        // Second delete of the same event
        assert_eq!(
            usecase.execute(&ctx).await,
            Err(RepoError::NotFound(event_id))
        );
    }
}
