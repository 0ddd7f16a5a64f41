use time::OffsetDateTime;
use uuid::Uuid;

/// A note record. The body lives in a separate content file named by
/// [`Note::file_key`]; only `title` is ever mutated after creation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Note {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub file_key: String,
    pub created_at: OffsetDateTime,
}
