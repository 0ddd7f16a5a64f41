use argon2::password_hash::PasswordHashString;
use uuid::Uuid;
use crate::email_string::EmailString;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: EmailString,
    pub hash: PasswordHashString,
}
