use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use calendar_store_infra::RepoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Internal server error")]
    InternalError,
    #[error("Invalid data provided: Error message: `{0}`")]
    BadClientData(String),
    #[error("404 Not found. Error message: `{0}`")]
    NotFound(String),
}

impl actix_web::error::ResponseError for CalendarError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header((header::CONTENT_TYPE, "text/html; charset=utf-8"))
            .body(self.to_string())
    }
}

impl From<RepoError> for CalendarError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(event_id) => Self::NotFound(format!(
                "The calendar event with id: {}, was not found.",
                event_id
            )),
            RepoError::InvalidInput(e) => Self::BadClientData(e.to_string()),
            RepoError::StorageFailure(_) => Self::InternalError,
        }
    }
}
