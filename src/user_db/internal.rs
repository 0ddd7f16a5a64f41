use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use async_trait::async_trait;
use rand::rngs::StdRng;
use tokio::sync::RwLock;
use crate::email_string::EmailString;
use crate::hasher::{Hasher, ProductionHasher};
use crate::lib_constants::MIN_PASSWORD_LEN;
use crate::rng::SyncRng;
use crate::user_db::{UserDb, UserDbError};
use crate::user_db::internal::data::{UserData, UsersData};
use crate::user_db::internal::io_trait::{ProductionUserDbIo, UserDbIo};
use crate::user_db::internal::user::User;

mod data;
mod io_trait;
pub mod user;

pub type ProductionUserDb = UserDbImpl<ProductionHasher, ProductionUserDbIo>;

#[allow(private_bounds)]
pub struct UserDbImpl<H: Hasher, Io: UserDbIo> {
    hasher: H,
    io: Io,
    state: RwLock<State>,
}

struct State {
    users_by_email: HashMap<String, Arc<User>>,
}

impl From<UsersData> for State {
    fn from(value: UsersData) -> Self {
        State {
            users_by_email: value.users
                .into_iter()
                .map(|data| {
                    let user = Arc::new(
                        User {
                            id: data.id,
                            name: data.name,
                            email: data.email,
                            hash: data.hash,
                        }
                    );
                    (user.email.to_string(), user)
                })
                .collect(),
        }
    }
}

fn to_users_data(state: &State) -> UsersData {
    let mut users: Vec<_> = state.users_by_email
        .values()
        .map(|user| {
            UserData {
                id: user.id,
                name: user.name.clone(),
                email: user.email.clone(),
                hash: user.hash.clone(),
            }
        })
        .collect();
    // stable file contents regardless of map iteration order
    users.sort_by(|a, b| a.email.as_str().cmp(b.email.as_str()));
    UsersData { users }
}

impl ProductionUserDb {
    pub async fn new(
        user_db: impl AsRef<Path>,
        hasher: ProductionHasher,
        rng: SyncRng<StdRng>,
    ) -> Result<ProductionUserDb, UserDbError> {
        Self::new_internal(
            hasher,
            ProductionUserDbIo::new(user_db, rng).await?,
        ).await
    }
}

#[allow(private_bounds)]
impl<H: Hasher, Io: UserDbIo> UserDbImpl<H, Io> {
    async fn new_internal(
        hasher: H,
        io: Io,
    ) -> Result<UserDbImpl<H, Io>, UserDbError> {
        let state = io.read_user_file().await?.into();
        Ok(
            UserDbImpl {
                hasher,
                io,
                state: RwLock::new(state),
            }
        )
    }
}

#[async_trait]
impl<H: Hasher, Io: UserDbIo> UserDb for UserDbImpl<H, Io> {
    async fn create_user(
        &self,
        name: Option<String>,
        email: EmailString,
        password: &str,
    ) -> Result<Arc<User>, UserDbError> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(UserDbError::PasswordTooShort);
        }

        // hashing is slow, keep it outside the lock
        let hash = self.hasher.generate_hash(password)?;

        let mut state = self.state.write().await;
        if state.users_by_email.contains_key(email.as_str()) {
            return Err(UserDbError::EmailTaken);
        }
        let user = Arc::new(
            User {
                id: self.io.generate_uuid(),
                name,
                email,
                hash,
            }
        );
        state.users_by_email.insert(user.email.to_string(), user.clone());
        if let Err(e) = self.io.write_user_file(&to_users_data(&state)).await {
            state.users_by_email.remove(user.email.as_str());
            return Err(e);
        }
        Ok(user)
    }

    async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Arc<User>>, UserDbError> {
        Ok(
            self.state.read().await
                .users_by_email
                .get(email)
                .cloned()
        )
    }

    async fn check_user_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Arc<User>>, UserDbError> {
        let user = self.state.read().await
            .users_by_email
            .get(email)
            .cloned();

        Ok(
            user.filter(|user|
                self.hasher.check_hash(user.hash.password_hash(), password)
            )
        )
    }
}
