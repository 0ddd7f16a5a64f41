use log::error;
use marknotes::note_store::NoteStoreError;
use rocket::Request;
use rocket::http::Status;
use rocket::response::{self, status, Responder};
use rocket::serde::json::Json;
use crate::routes::api::model::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    TitleRequired,
    NotFound,
    Forbidden,
    Internal,
}

impl From<NoteStoreError> for ApiError {
    fn from(e: NoteStoreError) -> Self {
        match e {
            NoteStoreError::EmptyTitle => ApiError::TitleRequired,
            NoteStoreError::NotFound => ApiError::NotFound,
            e => {
                error!("note store failure: {e}");
                ApiError::Internal
            },
        }
    }
}

impl ApiError {
    fn status_and_message(&self) -> (Status, &'static str) {
        match self {
            ApiError::TitleRequired =>
                (Status::BadRequest, "Title is required"),
            ApiError::NotFound => (Status::NotFound, "Note not found"),
            ApiError::Forbidden => (Status::Forbidden, "Forbidden"),
            ApiError::Internal =>
                (Status::InternalServerError, "Internal error"),
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let (status, message) = self.status_and_message();
        status::Custom(
            status,
            Json(
                ErrorResponse {
                    error: message.to_owned(),
                }
            ),
        ).respond_to(request)
    }
}
