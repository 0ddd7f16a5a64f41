use marknotes::access_token::AccessTokenData;
use uuid::Uuid;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoginResult {
    pub user_id: Uuid,
    pub access_token: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifiedAccess {
    pub token: String,
    pub data: AccessTokenData,
}
