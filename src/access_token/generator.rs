use std::fs;
use std::path::Path;
use josekit::jwk::Jwk;
use josekit::jws::JwsHeader;
use josekit::jws::alg::hmac::{HmacJwsAlgorithm, HmacJwsSigner};
use josekit::jwt;
use josekit::jwt::JwtPayload;
use time::OffsetDateTime;
use uuid::Uuid;
use errors::AccessTokenGeneratorError;
use crate::access_token::data::EMAIL_CLAIM_NAME;
use crate::email_string::EmailString;

pub mod errors;

pub struct AccessTokenGenerator {
    signer: HmacJwsSigner,
}

impl AccessTokenGenerator {
    pub fn from_jwk(jwk: &Jwk) -> Result<Self, AccessTokenGeneratorError> {
        Ok(
            AccessTokenGenerator {
                signer: HmacJwsAlgorithm::Hs256.signer_from_jwk(jwk)?,
            }
        )
    }

    pub fn from_file(
        path: impl AsRef<Path>,
    ) -> Result<Self, AccessTokenGeneratorError> {
        Self::from_jwk(&Jwk::from_bytes(fs::read(path)?)?)
    }

    pub fn generate_token(
        &self,
        user_id: Uuid,
        email: &EmailString,
        issued_at: OffsetDateTime,
        expires_at: OffsetDateTime,
    ) -> Result<String, AccessTokenGeneratorError> {
        let mut payload = JwtPayload::new();
        payload.set_subject(user_id.to_string());
        payload.set_claim(
            EMAIL_CLAIM_NAME,
            Some(serde_json::to_value(email.as_str())?),
        )?;
        payload.set_issued_at(&issued_at.into());
        payload.set_expires_at(&expires_at.into());

        Ok(
            jwt::encode_with_signer(
                &payload,
                &JwsHeader::new(),
                &self.signer,
            )?
        )
    }
}
