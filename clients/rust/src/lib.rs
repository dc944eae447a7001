mod base;
mod event;
mod status;

pub use base::{APIError, APIErrorVariant, APIResponse};
pub(crate) use base::BaseClient;
use event::CalendarEventClient;
pub use event::{CreateEventInput, UpdateEventInput};
use status::StatusClient;
use std::sync::Arc;

pub use calendar_store_api_structs::dtos::*;
pub use calendar_store_domain::ID;

// Domain
pub use calendar_store_api_structs::dtos::EventDTO as CalendarEvent;

/// Calendar Store Server SDK
///
/// The SDK contains methods for interacting with the Calendar Store server
/// API.
#[derive(Clone)]
pub struct CalendarSDK {
    pub event: CalendarEventClient,
    pub status: StatusClient,
}

impl CalendarSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let event = CalendarEventClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { event, status }
    }
}
