use std::ops::DerefMut;
use argon2::{Algorithm, Argon2, PasswordHash, PasswordHasher, Version};
use argon2::password_hash::{PasswordHashString, SaltString};
use log::warn;
use rand::rngs::StdRng;
use thiserror::Error;
use crate::rng::SyncRng;

pub trait Hasher: Send + Sync {
    fn generate_hash(
        &self,
        password: &str,
    ) -> Result<PasswordHashString, HasherError>;

    fn check_hash(&self, hash: PasswordHash<'_>, password: &str) -> bool;
}

#[derive(Debug, Error)]
pub enum HasherError {
    #[error("password hashing failed: {0}")]
    Hashing(#[from] argon2::password_hash::Error),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductionHasherConfig {
    pub argon2_params: argon2::Params,
}

impl ProductionHasherConfig {
    pub fn new(argon2_params: argon2::Params) -> Self {
        ProductionHasherConfig {
            argon2_params,
        }
    }
}

pub struct ProductionHasher {
    config: ProductionHasherConfig,
    rng: SyncRng<StdRng>,
}

impl ProductionHasher {
    pub fn new(
        config: ProductionHasherConfig,
        rng: SyncRng<StdRng>,
    ) -> Self {
        ProductionHasher {
            config,
            rng,
        }
    }

    fn get_hasher(&self) -> Argon2<'_> {
        Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            self.config.argon2_params.clone(),
        )
    }

    fn make_salt(&self) -> SaltString {
        SaltString::generate(self.rng.get_rng().deref_mut())
    }
}

impl Hasher for ProductionHasher {
    fn generate_hash(
        &self,
        password: &str,
    ) -> Result<PasswordHashString, HasherError> {
        let salt = self.make_salt();
        let hasher = self.get_hasher();
        Ok(
            hasher.hash_password(password.as_bytes(), &salt)?
                .serialize()
        )
    }

    fn check_hash(&self, hash: PasswordHash<'_>, password: &str) -> bool {
        hash.verify_password(&[&self.get_hasher()], password)
            .map(|_| true)
            .unwrap_or_else(|e| {
                if !matches!(e, argon2::password_hash::Error::Password) {
                    warn!("hash verification failed abnormally: {e}");
                }
                false
            })
    }
}
