use crate::shared::entity::ID;
use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The caller controlled part of a `CalendarEvent`.
///
/// Creating and updating an event both take a full set of fields, the
/// identifier is always owned by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventFields {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
}

impl EventFields {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            time: None,
            name: name.into(),
            description: None,
            location: None,
        }
    }

    pub fn validate(&self) -> Result<(), InvalidEventError> {
        if self.name.trim().is_empty() {
            return Err(InvalidEventError::EmptyName);
        }
        // Times of day are kept to the minute
        if let Some(time) = self.time {
            if time.second() != 0 || time.nanosecond() != 0 {
                return Err(InvalidEventError::InvalidTime(time.to_string()));
            }
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidEventError {
    #[error("Event name must not be empty")]
    EmptyName,
    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),
}

/// A named occurrence on a calendar date, optionally with a time,
/// location and description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: ID,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
}

impl CalendarEvent {
    pub fn new(id: ID, fields: EventFields) -> Self {
        Self {
            id,
            date: fields.date,
            time: fields.time,
            name: fields.name,
            description: fields.description,
            location: fields.location,
        }
    }

    pub fn fields(&self) -> EventFields {
        EventFields {
            date: self.date,
            time: self.time,
            name: self.name.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
        }
    }
}
