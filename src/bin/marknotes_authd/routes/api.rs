use std::str::FromStr;
use marknotes::email_string::EmailString;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{catchers, get, post, routes, Build, Rocket, State};
use crate::access_granter::AccessGranter;
use crate::app_constants::API_PREFIX;
use authorization_header::AuthorizationHeader;
use errors::ApiError;
use model::{
    LoginRequest, LoginResponse, SignupRequest, SignupResponse, TokenPayload,
    VerifyResponse,
};

mod authorization_header;
mod catchers;
mod errors;
mod model;

#[post("/signup", data = "<request>")]
async fn signup(
    access_granter: &State<AccessGranter>,
    request: Json<SignupRequest>,
) -> Result<status::Custom<Json<SignupResponse>>, ApiError> {
    let request = request.into_inner();
    let (Some(email), Some(password)) = (request.email, request.password)
    else {
        return Err(ApiError::MissingFields);
    };
    let email = EmailString::from_str(&email)
        .map_err(|_| ApiError::InvalidEmail)?;
    let user = access_granter
        .signup_user(request.name, email, &password)
        .await?;
    Ok(
        status::Custom(
            Status::Created,
            Json(
                SignupResponse {
                    message: "Created successfully",
                    id: user.id,
                    name: user.name.clone(),
                    email: user.email.to_string(),
                }
            ),
        )
    )
}

#[post("/login", data = "<request>")]
async fn login(
    access_granter: &State<AccessGranter>,
    request: Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let request = request.into_inner();
    let (Some(email), Some(password)) = (request.email, request.password)
    else {
        return Err(ApiError::MissingFields);
    };
    let result = access_granter.login_user(&email, &password).await?;
    Ok(
        Json(
            LoginResponse {
                message: "Logged in",
                id: result.user_id,
                jwt: result.access_token,
            }
        )
    )
}

#[get("/verify")]
async fn verify(
    access_granter: &State<AccessGranter>,
    authorization: AuthorizationHeader,
) -> Result<Json<VerifyResponse>, ApiError> {
    let verified = access_granter.verify_access(&authorization.0).await?;
    Ok(
        Json(
            VerifyResponse {
                message: "Verified",
                jwt: verified.token,
                payload: TokenPayload {
                    user_id: verified.data.user_id,
                    email: verified.data.email.to_string(),
                    iat: verified.data.issued_at.unix_timestamp(),
                    exp: verified.data.expires_at.unix_timestamp(),
                },
            }
        )
    )
}

pub trait ApiRocketBuildExt {
    fn install_auth_api(self) -> Self;
}

impl ApiRocketBuildExt for Rocket<Build> {
    fn install_auth_api(self) -> Self {
        self
            .mount(
                API_PREFIX,
                routes![
                    signup,
                    login,
                    verify,
                ]
            )
            .register(
                API_PREFIX,
                catchers![
                    catchers::bad_request,
                    catchers::unauthorized,
                    catchers::not_found,
                    catchers::unprocessable_entity,
                    catchers::internal_error,
                ]
            )
    }
}
