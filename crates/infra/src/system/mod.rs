use chrono::{Local, NaiveDate, NaiveDateTime};

// Mocking out time so that it is possible to run tests that depend on what day it is.
pub trait ISys: Send + Sync {
    /// The current local date and time
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
