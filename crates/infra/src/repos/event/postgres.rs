use super::{IEventRepo, RepoError};
use calendar_store_domain::{
    date_from_ymd, time_from_hm, CalendarEvent, EventFields, InvalidEventError, ID,
};
use chrono::{Datelike, NaiveDate, Timelike};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

/// Event store backed by a single postgres table.
///
/// The date lookup is a filter on the decomposed date columns and the order
/// within a date comes from `position`, which is drawn from a sequence on
/// insert and drawn again when an event moves to another date.
pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const EVENT_COLUMNS: &str =
    "event_uid, year, month, day, hour, minute, name, location, description";

#[derive(Debug, FromRow)]
struct EventRaw {
    event_uid: Uuid,
    year: i32,
    month: i32,
    day: i32,
    hour: Option<i32>,
    minute: Option<i32>,
    name: String,
    location: Option<String>,
    description: Option<String>,
}

impl TryFrom<EventRaw> for CalendarEvent {
    type Error = RepoError;

    fn try_from(e: EventRaw) -> Result<Self, Self::Error> {
        let event_uid = e.event_uid;
        let corrupt = |err: InvalidEventError| {
            RepoError::StorageFailure(format!("Corrupt event row {}: {}", event_uid, err))
        };
        let date = date_from_ymd(e.year, e.month as u32, e.day as u32).map_err(corrupt)?;
        let time = match (e.hour, e.minute) {
            (Some(hour), Some(minute)) => {
                Some(time_from_hm(hour as u32, minute as u32).map_err(corrupt)?)
            }
            (None, None) => None,
            (hour, minute) => {
                return Err(corrupt(InvalidEventError::InvalidTime(format!(
                    "{:?}:{:?}",
                    hour, minute
                ))))
            }
        };
        Ok(CalendarEvent {
            id: e.event_uid.into(),
            date,
            time,
            name: e.name,
            description: e.description,
            location: e.location,
        })
    }
}

struct DateColumns {
    year: i32,
    month: i32,
    day: i32,
}

impl From<NaiveDate> for DateColumns {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month() as i32,
            day: date.day() as i32,
        }
    }
}

fn storage_failure(e: sqlx::Error) -> RepoError {
    error!("Event query failed: {:?}", e);
    RepoError::StorageFailure(e.to_string())
}

fn into_events(rows: Vec<EventRaw>) -> Result<Vec<CalendarEvent>, RepoError> {
    rows.into_iter().map(CalendarEvent::try_from).collect()
}

#[async_trait::async_trait]
impl IEventRepo for PostgresEventRepo {
    async fn create(&self, fields: EventFields) -> Result<ID, RepoError> {
        fields.validate()?;
        let event_id = ID::new();
        let date = DateColumns::from(fields.date);
        sqlx::query(
            r#"
            INSERT INTO calendar_events(
                event_uid,
                year,
                month,
                day,
                hour,
                minute,
                name,
                location,
                description
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(event_id.inner_ref())
        .bind(date.year)
        .bind(date.month)
        .bind(date.day)
        .bind(fields.time.map(|t| t.hour() as i32))
        .bind(fields.time.map(|t| t.minute() as i32))
        .bind(&fields.name)
        .bind(&fields.location)
        .bind(&fields.description)
        .execute(&self.pool)
        .await
        .map_err(storage_failure)?;

        Ok(event_id)
    }

    async fn get(&self, event_id: &ID) -> Result<CalendarEvent, RepoError> {
        let event: Option<EventRaw> = sqlx::query_as(&format!(
            "SELECT {} FROM calendar_events AS e WHERE e.event_uid = $1",
            EVENT_COLUMNS
        ))
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_failure)?;

        match event {
            Some(event) => event.try_into(),
            None => Err(RepoError::NotFound(*event_id)),
        }
    }

    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<CalendarEvent>, RepoError> {
        let date = DateColumns::from(date);
        let events: Vec<EventRaw> = sqlx::query_as(&format!(
            r#"
            SELECT {} FROM calendar_events AS e
            WHERE e.year = $1 AND e.month = $2 AND e.day = $3
            ORDER BY e.position
            "#,
            EVENT_COLUMNS
        ))
        .bind(date.year)
        .bind(date.month)
        .bind(date.day)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_failure)?;

        into_events(events)
    }

    async fn list_all(&self) -> Result<Vec<CalendarEvent>, RepoError> {
        let events: Vec<EventRaw> = sqlx::query_as(&format!(
            "SELECT {} FROM calendar_events AS e ORDER BY e.position",
            EVENT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(storage_failure)?;

        into_events(events)
    }

    async fn list_ids(&self) -> Result<Vec<ID>, RepoError> {
        let ids: Vec<(Uuid,)> =
            sqlx::query_as("SELECT e.event_uid FROM calendar_events AS e ORDER BY e.position")
                .fetch_all(&self.pool)
                .await
                .map_err(storage_failure)?;

        Ok(ids.into_iter().map(|(id,)| id.into()).collect())
    }

    async fn update(
        &self,
        event_id: &ID,
        fields: EventFields,
    ) -> Result<CalendarEvent, RepoError> {
        fields.validate()?;
        let date = DateColumns::from(fields.date);
        let event: Option<EventRaw> = sqlx::query_as(&format!(
            r#"
            UPDATE calendar_events SET
                position = CASE
                    WHEN (year, month, day) = ($2, $3, $4) THEN position
                    ELSE nextval('calendar_event_position')
                END,
                year = $2,
                month = $3,
                day = $4,
                hour = $5,
                minute = $6,
                name = $7,
                location = $8,
                description = $9
            WHERE event_uid = $1
            RETURNING {}
            "#,
            EVENT_COLUMNS
        ))
        .bind(event_id.inner_ref())
        .bind(date.year)
        .bind(date.month)
        .bind(date.day)
        .bind(fields.time.map(|t| t.hour() as i32))
        .bind(fields.time.map(|t| t.minute() as i32))
        .bind(&fields.name)
        .bind(&fields.location)
        .bind(&fields.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_failure)?;

        match event {
            Some(event) => event.try_into(),
            None => Err(RepoError::NotFound(*event_id)),
        }
    }

    async fn delete(&self, event_id: &ID) -> Result<CalendarEvent, RepoError> {
        let event: Option<EventRaw> = sqlx::query_as(&format!(
            r#"
            DELETE FROM calendar_events AS e
            WHERE e.event_uid = $1
            RETURNING {}
            "#,
            EVENT_COLUMNS
        ))
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_failure)?;

        match event {
            Some(event) => event.try_into(),
            None => Err(RepoError::NotFound(*event_id)),
        }
    }
}
