use marknotes::access_token::AccessTokenGeneratorError;
use marknotes::user_db::UserDbError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessGranterError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid or expired token")]
    InvalidToken,

    #[error(transparent)]
    UserDb(#[from] UserDbError),

    #[error(transparent)]
    TokenGenerator(#[from] AccessTokenGeneratorError),
}
