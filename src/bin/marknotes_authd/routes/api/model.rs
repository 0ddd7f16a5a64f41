use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fields are optional so that incomplete bodies reach the handlers,
/// which report them with a uniform message.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SignupResponse {
    pub message: &'static str,
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub id: Uuid,
    pub jwt: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct VerifyResponse {
    pub message: &'static str,
    pub jwt: String,
    pub payload: TokenPayload,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPayload {
    pub user_id: Uuid,
    pub email: String,

    /// Issue and expiry instants as unix timestamps.
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
