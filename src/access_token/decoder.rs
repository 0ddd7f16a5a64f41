use std::fs;
use std::path::Path;
use std::str::FromStr;
use josekit::jwk::Jwk;
use josekit::jws::alg::hmac::{HmacJwsAlgorithm, HmacJwsVerifier};
use josekit::jwt;
use log::info;
use time::OffsetDateTime;
use uuid::Uuid;
use errors::AccessTokenDecoderError;
use crate::access_token::data::{AccessTokenData, EMAIL_CLAIM_NAME};
use crate::email_string::EmailString;

pub mod errors;

pub struct AccessTokenDecoder {
    verifier: HmacJwsVerifier,
}

impl AccessTokenDecoder {
    pub fn from_jwk(jwk: &Jwk) -> Result<Self, AccessTokenDecoderError> {
        Ok(
            AccessTokenDecoder {
                verifier: HmacJwsAlgorithm::Hs256.verifier_from_jwk(jwk)?,
            }
        )
    }

    pub fn from_file(
        path: impl AsRef<Path>,
    ) -> Result<Self, AccessTokenDecoderError> {
        Self::from_jwk(&Jwk::from_bytes(fs::read(path)?)?)
    }

    /// Decode the access token.
    ///
    /// # Errors
    /// All possible error values signify incorrect token data. Expiry is
    /// not judged here, the caller compares the returned timestamps
    /// against its clock.
    pub fn decode_token(
        &self,
        token: impl AsRef<[u8]>,
    ) -> Result<AccessTokenData, AccessTokenDecoderError> {
        let token = token.as_ref();
        let (payload, _) = jwt::decode_with_verifier(
            token,
            &self.verifier,
        )?;
        let user_id = payload.subject()
            .map(Uuid::from_str)
            .transpose()?
            .ok_or_else(|| missing_field(token, "subject"))?;
        let email = payload.claim(EMAIL_CLAIM_NAME)
            .map(|v| serde_json::from_value::<EmailString>(v.clone()))
            .transpose()
            .map_err(|e| {
                info!(
                    "invalid email in access token {}: {e}",
                    String::from_utf8_lossy(token),
                );
                AccessTokenDecoderError::PayloadParse(e)
            })?
            .ok_or_else(|| missing_field(token, EMAIL_CLAIM_NAME))?;
        let issued_at = payload.issued_at()
            .map(OffsetDateTime::from)
            .ok_or_else(|| missing_field(token, "issued_at"))?;
        let expires_at = payload.expires_at()
            .map(OffsetDateTime::from)
            .ok_or_else(|| missing_field(token, "expires_at"))?;
        Ok(
            AccessTokenData {
                user_id,
                email,
                issued_at,
                expires_at,
            }
        )
    }
}

fn missing_field(token: &[u8], part: &'static str) -> AccessTokenDecoderError {
    info!(
        "missing field {part} in access token {}",
        String::from_utf8_lossy(token),
    );
    AccessTokenDecoderError::PayloadMissing { part }
}
