use argon2::password_hash::PasswordHashString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::email_string::EmailString;

#[derive(Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(super) struct UserData {
    pub id: Uuid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub email: EmailString,

    #[serde(with = "crate::serde::password_hash_string")]
    pub hash: PasswordHashString,
}

#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(super) struct UsersData {
    #[serde(default, rename = "user")]
    pub users: Vec<UserData>,
}
