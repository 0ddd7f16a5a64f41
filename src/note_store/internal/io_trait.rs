use std::io::{ErrorKind, SeekFrom};
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use log::error;
use rand::rngs::StdRng;
use time::OffsetDateTime;
use tokio::fs;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use tokio::sync::Mutex;
use uuid::Uuid;
use crate::note_store::NoteStoreError;
use crate::note_store::internal::data::NotesData;
use crate::rng::{make_uuid, SyncRng};

#[async_trait]
pub(super) trait NoteStoreIo: Send + Sync {
    async fn read_note_file(&self) -> Result<NotesData, NoteStoreError>;

    async fn write_note_file(
        &self,
        data: &NotesData,
    ) -> Result<(), NoteStoreError>;

    async fn read_content(
        &self,
        file_key: &str,
    ) -> Result<Option<String>, NoteStoreError>;

    async fn write_content(
        &self,
        file_key: &str,
        content: &str,
    ) -> Result<(), NoteStoreError>;

    /// Removing a missing file is not an error.
    async fn remove_content(
        &self,
        file_key: &str,
    ) -> Result<(), NoteStoreError>;

    fn generate_uuid(&self) -> Uuid;

    fn get_time(&self) -> OffsetDateTime;
}

pub struct ProductionNoteStoreIo {
    db_file: Mutex<File>, // holds an os file lock
    data_directory: PathBuf,
    rng: SyncRng<StdRng>,
}

impl ProductionNoteStoreIo {
    pub async fn new(
        note_db_path: impl AsRef<Path>,
        data_directory: impl Into<PathBuf>,
        rng: SyncRng<StdRng>,
    ) -> Result<Self, NoteStoreError> {
        let data_directory = data_directory.into();
        fs::create_dir_all(&data_directory).await?;
        let std_file = std::fs::File::options()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(note_db_path)?;
        std_file.lock()?;
        Ok(
            ProductionNoteStoreIo {
                db_file: Mutex::new(File::from_std(std_file)),
                data_directory,
                rng,
            }
        )
    }

    fn content_path(&self, file_key: &str) -> PathBuf {
        self.data_directory.join(file_key)
    }
}

#[async_trait]
impl NoteStoreIo for ProductionNoteStoreIo {
    async fn read_note_file(&self) -> Result<NotesData, NoteStoreError> {
        let mut db_file = self.db_file.lock().await;
        db_file.seek(SeekFrom::Start(0)).await?;
        let mut contents = String::new();
        db_file.read_to_string(&mut contents).await?;
        Ok(toml::from_str(&contents)?)
    }

    async fn write_note_file(
        &self,
        data: &NotesData,
    ) -> Result<(), NoteStoreError> {
        let serialized = toml::to_string(data)?;
        let mut db_file = self.db_file.lock().await;
        db_file.seek(SeekFrom::Start(0)).await?;
        db_file.set_len(0).await?;
        db_file.write_all(serialized.as_bytes()).await?;
        db_file.flush().await?;
        Ok(())
    }

    async fn read_content(
        &self,
        file_key: &str,
    ) -> Result<Option<String>, NoteStoreError> {
        match fs::read_to_string(self.content_path(file_key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_content(
        &self,
        file_key: &str,
        content: &str,
    ) -> Result<(), NoteStoreError> {
        // write-then-rename keeps concurrent readers off half-written
        // files
        let tmp_path = self.content_path(
            &format!(".{}.tmp", self.generate_uuid()),
        );
        fs::write(&tmp_path, content).await?;
        if let Err(e) = fs::rename(&tmp_path, self.content_path(file_key)).await {
            if let Err(remove_error) = fs::remove_file(&tmp_path).await {
                error!(
                    "failed to clean up temporary content file {}: {remove_error}",
                    tmp_path.display(),
                );
            }
            return Err(e.into());
        }
        Ok(())
    }

    async fn remove_content(
        &self,
        file_key: &str,
    ) -> Result<(), NoteStoreError> {
        match fs::remove_file(self.content_path(file_key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn generate_uuid(&self) -> Uuid {
        make_uuid(&mut *self.rng.get_rng())
    }

    fn get_time(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}
