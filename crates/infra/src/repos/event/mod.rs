mod inmemory;
mod postgres;

use calendar_store_domain::{CalendarEvent, EventFields, InvalidEventError, ID};
use chrono::NaiveDate;
pub use inmemory::InMemoryEventRepo;
pub use postgres::PostgresEventRepo;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepoError {
    #[error("The calendar event with id: {0}, was not found")]
    NotFound(ID),
    #[error(transparent)]
    InvalidInput(#[from] InvalidEventError),
    #[error("Storage failure: {0}")]
    StorageFailure(String),
}

/// Store of `CalendarEvent`s indexed both by id and by calendar date.
///
/// Every method is a single atomic unit, no caller is able to observe a
/// state where the id lookup and the date lookup disagree.
#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    /// Assigns a new id to the event and stores it. An id is never handed
    /// out twice, not even after the event owning it was deleted.
    async fn create(&self, fields: EventFields) -> Result<ID, RepoError>;
    async fn get(&self, event_id: &ID) -> Result<CalendarEvent, RepoError>;
    /// Events on the given date in the order they were added to it.
    /// A date without events gives an empty list.
    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<CalendarEvent>, RepoError>;
    async fn list_all(&self) -> Result<Vec<CalendarEvent>, RepoError>;
    async fn list_ids(&self) -> Result<Vec<ID>, RepoError>;
    /// Replaces all the fields of the event. When the date changes the event
    /// is moved to the end of the new date.
    async fn update(&self, event_id: &ID, fields: EventFields)
        -> Result<CalendarEvent, RepoError>;
    async fn delete(&self, event_id: &ID) -> Result<CalendarEvent, RepoError>;
}
