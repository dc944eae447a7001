use crate::{APIResponse, BaseClient, ID};
use calendar_store_api_structs::*;
use chrono::{NaiveDate, NaiveTime};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct CalendarEventClient {
    base: Arc<BaseClient>,
}

pub struct CreateEventInput {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
}

/// All the fields of the event are replaced
pub struct UpdateEventInput {
    pub event_id: ID,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
}

impl CalendarEventClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateEventInput) -> APIResponse<create_event::APIResponse> {
        let body = create_event::RequestBody {
            date: input.date,
            time: input.time,
            name: input.name,
            description: input.description,
            location: input.location,
        };

        self.base
            .post(body, "events".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, event_id: ID) -> APIResponse<get_event::APIResponse> {
        self.base
            .get(format!("events/{}", event_id), StatusCode::OK)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_events::APIResponse> {
        self.base.get("events".into(), StatusCode::OK).await
    }

    pub async fn get_ids(&self) -> APIResponse<get_event_ids::APIResponse> {
        self.base.get("events/ids".into(), StatusCode::OK).await
    }

    pub async fn get_today(&self) -> APIResponse<get_events_today::APIResponse> {
        self.base.get("today".into(), StatusCode::OK).await
    }

    pub async fn get_by_date(
        &self,
        date: NaiveDate,
    ) -> APIResponse<get_events_by_date::APIResponse> {
        self.base
            .get(date_path(date), StatusCode::OK)
            .await
    }

    pub async fn get_ids_by_date(
        &self,
        date: NaiveDate,
    ) -> APIResponse<get_events_by_date::IdOnlyAPIResponse> {
        self.base
            .get(format!("{}?idOnly=true", date_path(date)), StatusCode::OK)
            .await
    }

    pub async fn update(&self, input: UpdateEventInput) -> APIResponse<update_event::APIResponse> {
        let body = update_event::RequestBody {
            date: input.date,
            time: input.time,
            name: input.name,
            description: input.description,
            location: input.location,
        };
        self.base
            .put(body, format!("events/{}", input.event_id), StatusCode::OK)
            .await
    }

    /// Deletes the event and returns it
    pub async fn delete(&self, event_id: ID) -> APIResponse<delete_event::APIResponse> {
        self.base
            .delete(
                format!("events/{}?shouldReturn=true", event_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete_silently(&self, event_id: ID) -> APIResponse<()> {
        self.base
            .delete_no_content(format!("events/{}", event_id))
            .await
    }
}

fn date_path(date: NaiveDate) -> String {
    use chrono::Datelike;

    format!("events/{}/{}/{}", date.year(), date.month(), date.day())
}
