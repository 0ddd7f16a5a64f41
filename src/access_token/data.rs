use time::OffsetDateTime;
use uuid::Uuid;
use crate::email_string::EmailString;

pub const EMAIL_CLAIM_NAME: &str = "email";

/// Decoded token claims. Expiry is judged by the consumer against its
/// own clock; decoding only proves the signature and the claim shapes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessTokenData {
    pub user_id: Uuid,
    pub email: EmailString,
    pub issued_at: OffsetDateTime,
    pub expires_at: OffsetDateTime,
}
