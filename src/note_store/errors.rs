use std::io::Error as IoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NoteStoreError {
    #[error("note title must not be blank")]
    EmptyTitle,

    #[error("no such note")]
    NotFound,

    #[error(transparent)]
    Io(#[from] IoError),

    #[error("note db parsing error: {message}")]
    Parsing {
        message: String,
    },

    #[error("note db serialization error: {message}")]
    Serialization {
        message: String,
    },
}

impl From<toml::de::Error> for NoteStoreError {
    fn from(e: toml::de::Error) -> Self {
        NoteStoreError::Parsing {
            message: format!("{e}"),
        }
    }
}

impl From<toml::ser::Error> for NoteStoreError {
    fn from(e: toml::ser::Error) -> Self {
        NoteStoreError::Serialization {
            message: format!("{e}"),
        }
    }
}
