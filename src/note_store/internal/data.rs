use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;
use crate::data::Note;

#[derive(Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(super) struct NoteData {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub file_key: String,

    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(super) struct NotesData {
    #[serde(default, rename = "note")]
    pub notes: Vec<NoteData>,
}

impl From<NoteData> for Note {
    fn from(value: NoteData) -> Self {
        Note {
            id: value.id,
            user_id: value.user_id,
            title: value.title,
            file_key: value.file_key,
            created_at: value.created_at,
        }
    }
}

impl From<&Note> for NoteData {
    fn from(value: &Note) -> Self {
        NoteData {
            id: value.id,
            user_id: value.user_id,
            title: value.title.clone(),
            file_key: value.file_key.clone(),
            created_at: value.created_at,
        }
    }
}
