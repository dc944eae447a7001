use crate::InvalidEventError;
use chrono::{NaiveDate, NaiveTime};

/// Builds a calendar date from its decomposed parts, which is how dates
/// arrive in request paths and how they are stored in postgres.
pub fn date_from_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, InvalidEventError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| InvalidEventError::InvalidDate(format!("{}-{}-{}", year, month, day)))
}

pub fn time_from_hm(hour: u32, minute: u32) -> Result<NaiveTime, InvalidEventError> {
    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| InvalidEventError::InvalidTime(format!("{}:{}", hour, minute)))
}
