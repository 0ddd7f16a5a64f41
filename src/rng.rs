use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard};
use rand::{CryptoRng, Rng, RngCore};
use uuid::{Uuid, Variant, Version};

/// A process-wide rng shared between the components that need salts and
/// ids.
pub struct SyncRng<R: CryptoRng + RngCore + Send> {
    rng: Arc<Mutex<R>>,
}

impl<R: CryptoRng + RngCore + Send> SyncRng<R> {
    pub fn new(rng: R) -> Self {
        SyncRng {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn get_rng(&self) -> MutexGuard<'_, R> {
        self.rng.lock().unwrap()
    }
}

impl<R: CryptoRng + RngCore + Send> Deref for SyncRng<R> {
    type Target = Arc<Mutex<R>>;

    fn deref(&self) -> &Self::Target {
        &self.rng
    }
}

impl<R: CryptoRng + RngCore + Send> Clone for SyncRng<R> {
    fn clone(&self) -> Self {
        SyncRng {
            rng: self.rng.clone(),
        }
    }
}

pub fn make_uuid<R: Rng>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.r#gen())
        .with_variant(Variant::RFC4122)
        .with_version(Version::Random)
        .into_uuid()
}
