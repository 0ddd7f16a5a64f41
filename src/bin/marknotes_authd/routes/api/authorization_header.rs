use async_trait::async_trait;
use rocket::Request;
use rocket::http::Status;
use rocket::http::hyper::header;
use rocket::request::{FromRequest, Outcome};
use crate::routes::api::catchers::AuthFailure;

/// Raw Authorization header value, either `Bearer <token>` or a bare
/// token.
pub struct AuthorizationHeader(pub String);

#[async_trait]
impl<'r> FromRequest<'r> for AuthorizationHeader {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match request.headers().get_one(header::AUTHORIZATION.as_str()) {
            Some(value) =>
                Outcome::Success(AuthorizationHeader(value.to_owned())),
            None => {
                request.local_cache(||
                    AuthFailure(Some("Authorization header missing"))
                );
                Outcome::Error((Status::Unauthorized, ()))
            },
        }
    }
}
