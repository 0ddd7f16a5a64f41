use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::bin_constants::{DEFAULT_JWT_SECRET, DEFAULT_USER_DB};
use crate::config::hasher_config::ProductionHasherConfigData;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AuthConfig {
    pub user_db: PathBuf,
    pub jwt_secret: PathBuf,
    pub hasher_config: ProductionHasherConfigData,
}

impl Default for AuthConfig {
    fn default() -> Self {
        AuthConfig {
            user_db: DEFAULT_USER_DB.into(),
            jwt_secret: DEFAULT_JWT_SECRET.into(),
            hasher_config: ProductionHasherConfigData::default(),
        }
    }
}
