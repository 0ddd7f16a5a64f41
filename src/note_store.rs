mod errors;
mod internal;

use std::sync::Arc;
use async_trait::async_trait;
use uuid::Uuid;
use crate::data::Note;

pub use errors::NoteStoreError;
pub use internal::ProductionNoteStore;

#[async_trait]
pub trait NoteStore: Send + Sync {
    /// All notes owned by `user_id`, newest created first.
    async fn list_notes(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Arc<Note>>, NoteStoreError>;

    /// The record regardless of owner; callers decide whether a foreign
    /// owner is a not-found or a forbidden condition.
    async fn get_note(
        &self,
        note_id: Uuid,
    ) -> Result<Option<Arc<Note>>, NoteStoreError>;

    /// `Ok(None)` when the content file is missing: record/content
    /// divergence is reportable, not fatal.
    async fn read_content(
        &self,
        file_key: &str,
    ) -> Result<Option<String>, NoteStoreError>;

    /// Writes the content file before persisting the record, so an
    /// interruption can orphan a file but never produce a record
    /// pointing at nothing.
    async fn create_note(
        &self,
        user_id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Arc<Note>, NoteStoreError>;

    /// Either field may be omitted independently; omitted means
    /// unchanged. Supplied content may be empty, a supplied title may
    /// not be blank.
    async fn update_note(
        &self,
        note_id: Uuid,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Arc<Note>, NoteStoreError>;

    /// Deletes the record first, then the content file best-effort.
    /// `false` when no such record existed.
    async fn delete_note(
        &self,
        note_id: Uuid,
    ) -> Result<bool, NoteStoreError>;
}
