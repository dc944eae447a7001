use crate::error::CalendarError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use calendar_store_api_structs::create_event::*;
use calendar_store_domain::{CalendarEvent, EventFields, InvalidEventError};
use calendar_store_infra::{CalendarContext, RepoError};

fn handle_error(e: UseCaseError) -> CalendarError {
    match e {
        UseCaseError::InvalidEvent(e) => CalendarError::BadClientData(e.to_string()),
        UseCaseError::StorageError => CalendarError::InternalError,
    }
}

pub async fn create_event_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<CalendarContext>,
) -> Result<HttpResponse, CalendarError> {
    let usecase = CreateEventUseCase {
        fields: body.0.into(),
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Created().json(APIResponse::new(event)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct CreateEventUseCase {
    pub fields: EventFields,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidEvent(InvalidEventError),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEventUseCase {
    type Response = CalendarEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEvent";

    async fn execute(&mut self, ctx: &CalendarContext) -> Result<Self::Response, Self::Error> {
        let event_id = ctx
            .repos
            .events
            .create(self.fields.clone())
            .await
            .map_err(|e| match e {
                RepoError::InvalidInput(e) => UseCaseError::InvalidEvent(e),
                _ => UseCaseError::StorageError,
            })?;

        ctx.repos
            .events
            .get(&event_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 22).unwrap()
    }

    #[actix_web::test]
    async fn creates_event() {
        let ctx = CalendarContext::create_inmemory();
        let fields = EventFields {
            time: NaiveTime::from_hms_opt(19, 10, 0),
            description: Some("Take the odd numbered ones today.".into()),
            location: Some("home".into()),
            ..EventFields::new(date(), "Take medication")
        };

        let mut usecase = CreateEventUseCase {
            fields: fields.clone(),
        };
        let event = usecase.execute(&ctx).await.expect("To create event");

        assert_eq!(event.fields(), fields);
        assert_eq!(ctx.repos.events.get(&event.id).await, Ok(event.clone()));
        assert_eq!(ctx.repos.events.list_by_date(date()).await, Ok(vec![event]));
    }

    #[actix_web::test]
    async fn rejects_event_without_name() {
        let ctx = CalendarContext::create_inmemory();

        let mut usecase = CreateEventUseCase {
            fields: EventFields::new(date(), ""),
        };
        let res = usecase.execute(&ctx).await;

        assert_eq!(
            res,
            Err(UseCaseError::InvalidEvent(InvalidEventError::EmptyName))
        );
        assert!(ctx.repos.events.list_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn rejects_time_with_seconds() {
        let ctx = CalendarContext::create_inmemory();

        let mut usecase = CreateEventUseCase {
            fields: EventFields {
                time: NaiveTime::from_hms_opt(19, 10, 37),
                ..EventFields::new(date(), "Take medication")
            },
        };
        let res = usecase.execute(&ctx).await;

        assert_eq!(
            res,
            Err(UseCaseError::InvalidEvent(InvalidEventError::InvalidTime(
                "19:10:37".into()
            )))
        );
        assert!(ctx.repos.events.list_all().await.unwrap().is_empty());
    }
}
