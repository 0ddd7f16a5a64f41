use rocket::Request;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use crate::routes::api::model::ErrorResponse;

/// Reason recorded by request guards for the 401 catcher to report.
pub struct AuthFailure(pub Option<&'static str>);

fn error_response(message: &str) -> Json<ErrorResponse> {
    Json(
        ErrorResponse {
            error: message.to_owned(),
        }
    )
}

#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorResponse> {
    error_response("Bad request")
}

#[rocket::catch(401)]
pub fn unauthorized(request: &Request<'_>) -> Json<ErrorResponse> {
    let reason = request.local_cache(|| AuthFailure(None)).0
        .unwrap_or("Unauthenticated");
    error_response(reason)
}

#[rocket::catch(404)]
pub fn not_found() -> Json<ErrorResponse> {
    error_response("Not found")
}

// body shape errors are reported as plain bad requests
#[rocket::catch(422)]
pub fn unprocessable_entity() -> status::Custom<Json<ErrorResponse>> {
    status::Custom(Status::BadRequest, error_response("Invalid request body"))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    error_response("Internal error")
}
