use crate::dtos::{EventDTO, EventIdDTO};
use calendar_store_domain::{CalendarEvent, EventFields, ID};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub event: EventDTO,
}

impl EventResponse {
    pub fn new(event: CalendarEvent) -> Self {
        Self {
            event: EventDTO::new(event),
        }
    }
}

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EventsResponse {
    pub events: Vec<EventDTO>,
}

impl EventsResponse {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self {
            events: events.into_iter().map(EventDTO::new).collect(),
        }
    }
}

/// Body used both for creating an event and for replacing all the fields
/// of an existing one
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventBody {
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<NaiveTime>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl From<EventBody> for EventFields {
    fn from(body: EventBody) -> Self {
        Self {
            date: body.date,
            time: body.time,
            name: body.name,
            description: body.description,
            location: body.location,
        }
    }
}

pub mod get_events {
    use super::*;

    pub type APIResponse = EventsResponse;
}

pub mod get_event_ids {
    use super::*;

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub ids: Vec<ID>,
    }
}

pub mod get_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = EventResponse;
}

pub mod get_events_today {
    use super::*;

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub date_time: NaiveDateTime,
        pub events: Vec<EventDTO>,
    }

    impl APIResponse {
        pub fn new(date_time: NaiveDateTime, events: Vec<CalendarEvent>) -> Self {
            Self {
                date_time,
                events: events.into_iter().map(EventDTO::new).collect(),
            }
        }
    }
}

pub mod get_events_by_date {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub year: i32,
        pub month: u32,
        pub day: u32,
    }

    #[derive(Serialize, Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        #[serde(default)]
        pub id_only: bool,
    }

    pub type APIResponse = EventsResponse;

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct IdOnlyAPIResponse {
        pub events: Vec<EventIdDTO>,
    }

    impl IdOnlyAPIResponse {
        pub fn new(events: Vec<CalendarEvent>) -> Self {
            Self {
                events: events
                    .into_iter()
                    .map(|e| EventIdDTO { id: e.id })
                    .collect(),
            }
        }
    }
}

pub mod create_event {
    use super::*;

    pub type RequestBody = EventBody;

    pub type APIResponse = EventResponse;
}

pub mod update_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type RequestBody = EventBody;

    pub type APIResponse = EventResponse;
}

pub mod delete_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    #[derive(Serialize, Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        #[serde(default)]
        pub should_return: bool,
    }

    /// The removed event is only echoed back when asked for
    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub event: Option<EventDTO>,
    }

    impl APIResponse {
        pub fn new(event: Option<CalendarEvent>) -> Self {
            Self {
                event: event.map(EventDTO::new),
            }
        }
    }
}
