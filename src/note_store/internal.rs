use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use async_trait::async_trait;
use log::warn;
use rand::rngs::StdRng;
use tokio::sync::RwLock;
use uuid::Uuid;
use crate::data::Note;
use crate::note_store::{NoteStore, NoteStoreError};
use crate::note_store::internal::data::NotesData;
use crate::note_store::internal::io_trait::{NoteStoreIo, ProductionNoteStoreIo};
use crate::rng::SyncRng;
use crate::util::StrExt;

mod data;
mod io_trait;

pub type ProductionNoteStore = NoteStoreImpl<ProductionNoteStoreIo>;

#[allow(private_bounds)]
pub struct NoteStoreImpl<Io: NoteStoreIo> {
    io: Io,
    state: RwLock<State>,
}

struct State {
    notes: HashMap<Uuid, Arc<Note>>,
}

impl From<NotesData> for State {
    fn from(value: NotesData) -> Self {
        State {
            notes: value.notes
                .into_iter()
                .map(|data| {
                    let note = Arc::new(Note::from(data));
                    (note.id, note)
                })
                .collect(),
        }
    }
}

fn to_notes_data(state: &State) -> NotesData {
    let mut notes: Vec<_> = state.notes
        .values()
        .map(|note| note.as_ref().into())
        .collect();
    // stable file contents regardless of map iteration order
    notes.sort_by_key(|data: &data::NoteData| data.id);
    NotesData { notes }
}

impl ProductionNoteStore {
    pub async fn new(
        note_db: impl AsRef<Path>,
        data_directory: impl Into<PathBuf>,
        rng: SyncRng<StdRng>,
    ) -> Result<ProductionNoteStore, NoteStoreError> {
        Self::new_internal(
            ProductionNoteStoreIo::new(note_db, data_directory, rng).await?,
        ).await
    }
}

#[allow(private_bounds)]
impl<Io: NoteStoreIo> NoteStoreImpl<Io> {
    async fn new_internal(
        io: Io,
    ) -> Result<NoteStoreImpl<Io>, NoteStoreError> {
        let state = io.read_note_file().await?.into();
        Ok(
            NoteStoreImpl {
                io,
                state: RwLock::new(state),
            }
        )
    }
}

#[async_trait]
impl<Io: NoteStoreIo> NoteStore for NoteStoreImpl<Io> {
    async fn list_notes(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Arc<Note>>, NoteStoreError> {
        let mut notes: Vec<_> = self.state.read().await
            .notes
            .values()
            .filter(|note| note.user_id == user_id)
            .cloned()
            .collect();
        notes.sort_by(|a, b|
            b.created_at.cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        );
        Ok(notes)
    }

    async fn get_note(
        &self,
        note_id: Uuid,
    ) -> Result<Option<Arc<Note>>, NoteStoreError> {
        Ok(
            self.state.read().await
                .notes
                .get(&note_id)
                .cloned()
        )
    }

    async fn read_content(
        &self,
        file_key: &str,
    ) -> Result<Option<String>, NoteStoreError> {
        self.io.read_content(file_key).await
    }

    async fn create_note(
        &self,
        user_id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Arc<Note>, NoteStoreError> {
        let title = title.nonblank_to_some()
            .ok_or(NoteStoreError::EmptyTitle)?;
        let file_key = format!("{}.md", self.io.generate_uuid());

        // content file first: a crash here orphans a file, it never
        // leaves a record pointing at nothing
        self.io.write_content(&file_key, content).await?;

        let note = Arc::new(
            Note {
                id: self.io.generate_uuid(),
                user_id,
                title,
                file_key,
                created_at: self.io.get_time(),
            }
        );
        let mut state = self.state.write().await;
        state.notes.insert(note.id, note.clone());
        if let Err(e) = self.io.write_note_file(&to_notes_data(&state)).await {
            state.notes.remove(&note.id);
            return Err(e);
        }
        Ok(note)
    }

    async fn update_note(
        &self,
        note_id: Uuid,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Arc<Note>, NoteStoreError> {
        let new_title = title
            .map(|t| t.nonblank_to_some().ok_or(NoteStoreError::EmptyTitle))
            .transpose()?;

        let mut state = self.state.write().await;
        let existing = state.notes.get(&note_id)
            .cloned()
            .ok_or(NoteStoreError::NotFound)?;

        if let Some(content) = content {
            self.io.write_content(&existing.file_key, content).await?;
        }

        let Some(new_title) = new_title else {
            return Ok(existing);
        };
        let updated = Arc::new(
            Note {
                title: new_title,
                ..(*existing).clone()
            }
        );
        state.notes.insert(updated.id, updated.clone());
        if let Err(e) = self.io.write_note_file(&to_notes_data(&state)).await {
            state.notes.insert(existing.id, existing);
            return Err(e);
        }
        Ok(updated)
    }

    async fn delete_note(
        &self,
        note_id: Uuid,
    ) -> Result<bool, NoteStoreError> {
        let mut state = self.state.write().await;
        let Some(removed) = state.notes.remove(&note_id) else {
            return Ok(false);
        };
        // the record goes first: an interrupted delete may orphan the
        // content file, but a live record never points at nothing
        if let Err(e) = self.io.write_note_file(&to_notes_data(&state)).await {
            state.notes.insert(removed.id, removed);
            return Err(e);
        }
        // the delete has committed, failure past this point leaves an
        // orphan file at worst
        if let Err(e) = self.io.remove_content(&removed.file_key).await {
            warn!(
                "could not remove content file {}: {e}",
                removed.file_key,
            );
        }
        Ok(true)
    }
}
