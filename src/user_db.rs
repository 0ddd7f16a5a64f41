mod errors;
mod internal;

use std::sync::Arc;
use async_trait::async_trait;
use crate::email_string::EmailString;

pub use errors::UserDbError;
pub use internal::ProductionUserDb;
pub use internal::user::User;

#[async_trait]
pub trait UserDb: Send + Sync {
    /// Create a user record, storing only the password's hash.
    ///
    /// Fails with [`UserDbError::PasswordTooShort`] for passwords under
    /// the minimum length and [`UserDbError::EmailTaken`] for an email
    /// already present. Uniqueness is checked and the record inserted
    /// under one write lock.
    async fn create_user(
        &self,
        name: Option<String>,
        email: EmailString,
        password: &str,
    ) -> Result<Arc<User>, UserDbError>;

    async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Arc<User>>, UserDbError>;

    /// `None` both for an unknown email and for a wrong password;
    /// callers must not be able to tell the two apart.
    async fn check_user_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Arc<User>>, UserDbError>;
}
