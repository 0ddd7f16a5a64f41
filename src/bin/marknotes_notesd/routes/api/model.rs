use marknotes::data::Note;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Omitted fields leave the stored value unchanged.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteBody {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub file_key: String,

    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<&Note> for NoteBody {
    fn from(note: &Note) -> Self {
        NoteBody {
            id: note.id,
            user_id: note.user_id,
            title: note.title.clone(),
            file_key: note.file_key.clone(),
            created_at: note.created_at,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NotesResponse {
    pub notes: Vec<NoteBody>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NoteResponse {
    pub note: NoteBody,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NoteWithContentResponse {
    pub note: NoteBody,
    pub content: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
