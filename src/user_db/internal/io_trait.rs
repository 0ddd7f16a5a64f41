use std::io::SeekFrom;
use std::path::Path;
use async_trait::async_trait;
use rand::rngs::StdRng;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use tokio::sync::Mutex;
use uuid::Uuid;
use crate::rng::{make_uuid, SyncRng};
use crate::user_db::UserDbError;
use crate::user_db::internal::data::UsersData;

#[async_trait]
pub(super) trait UserDbIo: Send + Sync {
    async fn read_user_file(&self) -> Result<UsersData, UserDbError>;

    async fn write_user_file(
        &self,
        data: &UsersData,
    ) -> Result<(), UserDbError>;

    fn generate_uuid(&self) -> Uuid;
}

pub struct ProductionUserDbIo {
    db_file: Mutex<File>, // holds an os file lock
    rng: SyncRng<StdRng>,
}

impl ProductionUserDbIo {
    pub async fn new(
        user_db_path: impl AsRef<Path>,
        rng: SyncRng<StdRng>,
    ) -> Result<Self, UserDbError> {
        let std_file = std::fs::File::options()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(user_db_path)?;
        std_file.lock()?;
        Ok(
            ProductionUserDbIo {
                db_file: Mutex::new(File::from_std(std_file)),
                rng,
            }
        )
    }
}

#[async_trait]
impl UserDbIo for ProductionUserDbIo {
    async fn read_user_file(&self) -> Result<UsersData, UserDbError> {
        let mut db_file = self.db_file.lock().await;
        db_file.seek(SeekFrom::Start(0)).await?;
        let mut contents = String::new();
        db_file.read_to_string(&mut contents).await?;
        Ok(toml::from_str(&contents)?)
    }

    async fn write_user_file(
        &self,
        data: &UsersData,
    ) -> Result<(), UserDbError> {
        let serialized = toml::to_string(data)?;
        let mut db_file = self.db_file.lock().await;
        db_file.seek(SeekFrom::Start(0)).await?;
        db_file.set_len(0).await?;
        db_file.write_all(serialized.as_bytes()).await?;
        db_file.flush().await?;
        Ok(())
    }

    fn generate_uuid(&self) -> Uuid {
        make_uuid(&mut *self.rng.get_rng())
    }
}
