mod date;
mod event;
mod shared;

pub use date::{date_from_ymd, time_from_hm};
pub use event::{CalendarEvent, EventFields, InvalidEventError};
pub use shared::entity::ID;
