use async_trait::async_trait;
use log::info;
use rocket::http::Status;
use rocket::http::hyper::header;
use rocket::outcome::try_outcome;
use rocket::request::{FromRequest, Outcome};
use rocket::{Request, State};
use crate::routes::api::catchers::AuthFailure;
use crate::token_verifier::{TokenVerifier, VerifiedUser};

/// Proof that the request carried a token the auth daemon accepted.
/// Obtained before any store access happens.
pub struct Authenticated(pub VerifiedUser);

#[async_trait]
impl<'r> FromRequest<'r> for Authenticated {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(header) = request.headers()
            .get_one(header::AUTHORIZATION.as_str())
        else {
            request.local_cache(||
                AuthFailure(Some("Authorization header missing"))
            );
            return Outcome::Error((Status::Unauthorized, ()));
        };
        let verifier = try_outcome!(
            request.guard::<&State<Box<dyn TokenVerifier>>>().await
        );
        match verifier.verify(header).await {
            Ok(user) => Outcome::Success(Authenticated(user)),
            Err(e) => {
                info!("rejecting a request: {e}");
                request.local_cache(||
                    AuthFailure(Some("Invalid or expired token"))
                );
                Outcome::Error((Status::Unauthorized, ()))
            },
        }
    }
}
