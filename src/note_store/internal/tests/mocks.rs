use std::collections::HashMap;
use std::io;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};
use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;
use crate::note_store::NoteStoreError;
use crate::note_store::internal::data::{NoteData, NotesData};
use crate::note_store::internal::io_trait::NoteStoreIo;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum IoEvent {
    WroteContent(String),
    WroteDb,
    RemovedContent(String),
}

pub struct TestNoteStoreIo {
    initial: NotesData,
    contents: Mutex<HashMap<String, String>>,
    events: Mutex<Vec<IoEvent>>,
    fail_next_db_write: AtomicBool,
    fail_next_content_remove: AtomicBool,
    next_uuid: AtomicU64,
    next_second: AtomicI64,
}

impl TestNoteStoreIo {
    pub fn new() -> Self {
        Self::with_notes(Vec::new())
    }

    pub fn with_notes(notes: Vec<NoteData>) -> Self {
        TestNoteStoreIo {
            initial: NotesData { notes },
            contents: Mutex::new(HashMap::new()),
            events: Mutex::new(Vec::new()),
            fail_next_db_write: AtomicBool::new(false),
            fail_next_content_remove: AtomicBool::new(false),
            next_uuid: AtomicU64::new(1),
            next_second: AtomicI64::new(1),
        }
    }

    pub fn seed_content(&self, file_key: &str, content: &str) {
        self.contents.lock().unwrap()
            .insert(file_key.to_owned(), content.to_owned());
    }

    pub fn content(&self, file_key: &str) -> Option<String> {
        self.contents.lock().unwrap().get(file_key).cloned()
    }

    pub fn events(&self) -> Vec<IoEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn fail_next_db_write(&self) {
        self.fail_next_db_write.store(true, Ordering::Relaxed);
    }

    pub fn fail_next_content_remove(&self) {
        self.fail_next_content_remove.store(true, Ordering::Relaxed);
    }

    fn record(&self, event: IoEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl NoteStoreIo for TestNoteStoreIo {
    async fn read_note_file(&self) -> Result<NotesData, NoteStoreError> {
        Ok(self.initial.clone())
    }

    async fn write_note_file(
        &self,
        _data: &NotesData,
    ) -> Result<(), NoteStoreError> {
        if self.fail_next_db_write.swap(false, Ordering::Relaxed) {
            return Err(io::Error::other("injected write failure").into());
        }
        self.record(IoEvent::WroteDb);
        Ok(())
    }

    async fn read_content(
        &self,
        file_key: &str,
    ) -> Result<Option<String>, NoteStoreError> {
        Ok(self.content(file_key))
    }

    async fn write_content(
        &self,
        file_key: &str,
        content: &str,
    ) -> Result<(), NoteStoreError> {
        self.contents.lock().unwrap()
            .insert(file_key.to_owned(), content.to_owned());
        self.record(IoEvent::WroteContent(file_key.to_owned()));
        Ok(())
    }

    async fn remove_content(
        &self,
        file_key: &str,
    ) -> Result<(), NoteStoreError> {
        if self.fail_next_content_remove.swap(false, Ordering::Relaxed) {
            return Err(io::Error::other("injected removal failure").into());
        }
        self.contents.lock().unwrap().remove(file_key);
        self.record(IoEvent::RemovedContent(file_key.to_owned()));
        Ok(())
    }

    fn generate_uuid(&self) -> Uuid {
        Uuid::from_u128(
            self.next_uuid.fetch_add(1, Ordering::Relaxed).into()
        )
    }

    fn get_time(&self) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(
            self.next_second.fetch_add(1, Ordering::Relaxed)
        ).expect("invalid mock timestamp")
    }
}
