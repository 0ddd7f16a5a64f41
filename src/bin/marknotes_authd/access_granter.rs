use std::sync::Arc;
use log::{debug, info, trace, warn};
use marknotes::access_token::{AccessTokenDecoder, AccessTokenGenerator};
use marknotes::email_string::EmailString;
use marknotes::user_db::{User, UserDb};
use time::OffsetDateTime;
use crate::app_constants::ACCESS_TOKEN_VALIDITY;

mod errors;
mod model;

pub use errors::AccessGranterError;
pub use model::{LoginResult, VerifiedAccess};

pub struct AccessGranter {
    user_db: Box<dyn UserDb>,
    access_token_generator: AccessTokenGenerator,
    access_token_decoder: AccessTokenDecoder,
}

impl AccessGranter {
    pub fn new(
        user_db: Box<dyn UserDb>,
        access_token_generator: AccessTokenGenerator,
        access_token_decoder: AccessTokenDecoder,
    ) -> Self {
        AccessGranter {
            user_db,
            access_token_generator,
            access_token_decoder,
        }
    }

    pub async fn signup_user(
        &self,
        name: Option<String>,
        email: EmailString,
        password: &str,
    ) -> Result<Arc<User>, AccessGranterError> {
        debug!("creating user \"{email}\"");
        let user = self.user_db.create_user(name, email, password).await?;
        info!("created user \"{}\" with id {}", user.email, user.id);
        Ok(user)
    }

    pub async fn login_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<LoginResult, AccessGranterError> {
        debug!("logging user \"{email}\" in");
        let Some(user) = self.user_db
            .check_user_credentials(email, password)
            .await?
        else {
            warn!("invalid credentials for user \"{email}\"");
            return Err(AccessGranterError::InvalidCredentials);
        };
        let now = OffsetDateTime::now_utc();
        let access_token = self.access_token_generator
            .generate_token(
                user.id,
                &user.email,
                now,
                now + ACCESS_TOKEN_VALIDITY,
            )?;
        info!("logged user \"{}\" in", user.email);
        Ok(
            LoginResult {
                user_id: user.id,
                access_token,
            }
        )
    }

    pub async fn verify_access(
        &self,
        auth_header_value: &str,
    ) -> Result<VerifiedAccess, AccessGranterError> {
        trace!("verifying access by header {auth_header_value}");
        // raw tokens are accepted alongside the Bearer scheme
        let token = auth_header_value.strip_prefix("Bearer ")
            .unwrap_or(auth_header_value);
        let data = self.access_token_decoder.decode_token(token)
            .map_err(|e| {
                warn!("failed to decode token: {e}");
                AccessGranterError::InvalidToken
            })?;
        if OffsetDateTime::now_utc() >= data.expires_at {
            info!("expired token for user \"{}\"", data.email);
            return Err(AccessGranterError::InvalidToken);
        }
        trace!("valid token for user \"{}\"", data.email);
        Ok(
            VerifiedAccess {
                token: token.to_owned(),
                data,
            }
        )
    }
}
