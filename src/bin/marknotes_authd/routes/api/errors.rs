use log::error;
use marknotes::user_db::UserDbError;
use rocket::Request;
use rocket::http::Status;
use rocket::response::{self, status, Responder};
use rocket::serde::json::Json;
use crate::access_granter::AccessGranterError;
use crate::routes::api::model::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    MissingFields,
    InvalidEmail,
    PasswordTooShort,
    EmailTaken,
    InvalidCredentials,
    InvalidToken,
    Internal,
}

impl From<AccessGranterError> for ApiError {
    fn from(e: AccessGranterError) -> Self {
        match e {
            AccessGranterError::InvalidCredentials =>
                ApiError::InvalidCredentials,
            AccessGranterError::InvalidToken => ApiError::InvalidToken,
            AccessGranterError::UserDb(UserDbError::PasswordTooShort) =>
                ApiError::PasswordTooShort,
            AccessGranterError::UserDb(UserDbError::EmailTaken) =>
                ApiError::EmailTaken,
            AccessGranterError::UserDb(e) => {
                error!("user db failure: {e}");
                ApiError::Internal
            },
            AccessGranterError::TokenGenerator(e) => {
                error!("token generation failure: {e}");
                ApiError::Internal
            },
        }
    }
}

impl ApiError {
    fn status_and_message(&self) -> (Status, &'static str) {
        match self {
            ApiError::MissingFields =>
                (Status::BadRequest, "Email and password are required"),
            ApiError::InvalidEmail => (Status::BadRequest, "Invalid email"),
            ApiError::PasswordTooShort =>
                (Status::BadRequest, "Password needs at least 8 characters"),
            ApiError::EmailTaken =>
                (Status::BadRequest, "Email already in use"),
            ApiError::InvalidCredentials =>
                (Status::Unauthorized, "Invalid credentials"),
            ApiError::InvalidToken =>
                (Status::Unauthorized, "Invalid or expired token"),
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
