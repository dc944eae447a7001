use crate::{
    error::CalendarError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use calendar_store_api_structs::get_events_today::*;
use calendar_store_domain::CalendarEvent;
use calendar_store_infra::{CalendarContext, RepoError};
use chrono::NaiveDateTime;

pub async fn get_events_today_controller(
    ctx: web::Data<CalendarContext>,
) -> Result<HttpResponse, CalendarError> {
    execute(GetEventsTodayUseCase {}, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.now, res.events)))
        .map_err(CalendarError::from)
}

#[derive(Debug)]
pub struct GetEventsTodayUseCase {}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub now: NaiveDateTime,
    pub events: Vec<CalendarEvent>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventsTodayUseCase {
    type Response = UseCaseResponse;

    type Error = RepoError;

    const NAME: &'static str = "GetEventsToday";

    async fn execute(&mut self, ctx: &CalendarContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.now();
        let events = ctx.repos.events.list_by_date(now.date()).await?;
        Ok(UseCaseResponse { now, events })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use calendar_store_domain::EventFields;
    use calendar_store_infra::ISys;
    use chrono::{Duration, NaiveDate};
    use std::sync::Arc;

    struct StaticTimeSys {}
    impl ISys for StaticTimeSys {
        fn now(&self) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2025, 8, 22)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap()
        }
    }

    #[actix_web::test]
    async fn lists_only_todays_events() {
        let mut ctx = CalendarContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys {});
        let today = ctx.sys.today();

        let walk = ctx
            .repos
            .events
            .create(EventFields::new(today, "Walk the dog"))
            .await
            .unwrap();
        ctx.repos
            .events
            .create(EventFields::new(
                today + Duration::days(1),
                "Grocery Store Trip",
            ))
            .await
            .unwrap();

        let mut usecase = GetEventsTodayUseCase {};
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.now, StaticTimeSys {}.now());
        assert_eq!(res.events.len(), 1);
        assert_eq!(res.events[0].id, walk);
    }
}
