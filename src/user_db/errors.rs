use std::io::Error as IoError;
use thiserror::Error;
use crate::hasher::HasherError;
use crate::lib_constants::MIN_PASSWORD_LEN;

#[derive(Debug, Error)]
pub enum UserDbError {
    #[error("password needs at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,

    #[error("email already in use")]
    EmailTaken,

    #[error(transparent)]
    Io(#[from] IoError),

    #[error("user db parsing error: {message}")]
    Parsing {
        message: String,
    },

    #[error("user db serialization error: {message}")]
    Serialization {
        message: String,
    },

    #[error(transparent)]
    Hasher(#[from] HasherError),
}

impl From<toml::de::Error> for UserDbError {
    fn from(e: toml::de::Error) -> Self {
        UserDbError::Parsing {
            message: format!("{e}"),
        }
    }
}

impl From<toml::ser::Error> for UserDbError {
    fn from(e: toml::ser::Error) -> Self {
        UserDbError::Serialization {
            message: format!("{e}"),
        }
    }
}
