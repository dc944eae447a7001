use calendar_store_domain::{CalendarEvent, ID};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Wire representation of a `CalendarEvent`. Optional fields are left out
/// of the json when they are not set.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventDTO {
    pub id: ID,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl EventDTO {
    pub fn new(event: CalendarEvent) -> Self {
        Self {
            id: event.id,
            date: event.date,
            time: event.time,
            name: event.name,
            description: event.description,
            location: event.location,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventIdDTO {
    pub id: ID,
}
