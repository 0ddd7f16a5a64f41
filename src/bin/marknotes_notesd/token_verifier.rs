use std::time::Duration;
use async_trait::async_trait;
use log::{trace, warn};
use marknotes::email_string::EmailString;
use serde::Deserialize;
use uuid::Uuid;

mod errors;
#[cfg(test)] mod tests;

pub use errors::TokenVerifierError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifiedUser {
    pub user_id: Uuid,
    pub email: EmailString,
}

/// Identity checks are delegated to the auth daemon; notes never see
/// the signing secret.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(
        &self,
        auth_header_value: &str,
    ) -> Result<VerifiedUser, TokenVerifierError>;
}

pub struct RemoteTokenVerifier {
    client: reqwest::Client,
    verify_url: String,
}

#[derive(Deserialize)]
struct VerifyResponseBody {
    payload: VerifyResponsePayload,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerifyResponsePayload {
    user_id: Uuid,
    email: EmailString,
}

impl RemoteTokenVerifier {
    pub fn new(
        auth_base_url: &str,
        timeout: Duration,
    ) -> Result<Self, TokenVerifierError> {
        Ok(
            RemoteTokenVerifier {
                client: reqwest::Client::builder()
                    .timeout(timeout)
                    .build()?,
                verify_url: format!(
                    "{}/auth/verify",
                    auth_base_url.trim_end_matches('/'),
                ),
            }
        )
    }
}

#[async_trait]
impl TokenVerifier for RemoteTokenVerifier {
    async fn verify(
        &self,
        auth_header_value: &str,
    ) -> Result<VerifiedUser, TokenVerifierError> {
        let header = if auth_header_value.starts_with("Bearer ") {
            auth_header_value.to_owned()
        } else {
            format!("Bearer {auth_header_value}")
        };
        let response = self.client
            .get(&self.verify_url)
            .header(reqwest::header::AUTHORIZATION, header)
            .send()
            .await
            .map_err(|e| {
                // a slow or down auth daemon fails the check, it never
                // waves the request through
                warn!("auth daemon is unreachable: {e}");
                TokenVerifierError::Unavailable
            })?;
        if !response.status().is_success() {
            trace!(
                "auth daemon rejected a token with status {}",
                response.status(),
            );
            return Err(TokenVerifierError::Rejected);
        }
        let body: VerifyResponseBody = response.json()
            .await
            .map_err(|e| {
                warn!("malformed verify response: {e}");
                TokenVerifierError::Unavailable
            })?;
        Ok(
            VerifiedUser {
                user_id: body.payload.user_id,
                email: body.payload.email,
            }
        )
    }
}
