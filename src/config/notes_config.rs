use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::bin_constants::{
    DEFAULT_AUTH_BASE_URL, DEFAULT_DATA_DIR, DEFAULT_NOTE_DB,
    DEFAULT_VERIFY_TIMEOUT_MS,
};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NotesConfig {
    /// Note metadata database file.
    pub note_db: PathBuf,

    /// Directory holding the note content files.
    pub data_directory: PathBuf,

    /// Base url of the auth daemon, without the `/auth` prefix.
    pub auth_base_url: String,

    /// Upper bound on one verify round trip. Exceeding it fails the
    /// request as unauthenticated, it never bypasses verification.
    pub verify_timeout_ms: u64,
}

impl Default for NotesConfig {
    fn default() -> Self {
        NotesConfig {
            note_db: DEFAULT_NOTE_DB.into(),
            data_directory: DEFAULT_DATA_DIR.into(),
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            verify_timeout_ms: DEFAULT_VERIFY_TIMEOUT_MS,
        }
    }
}
