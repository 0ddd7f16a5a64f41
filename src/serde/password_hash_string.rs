//! PHC string serde adapter for the credential records.

use argon2::password_hash::PasswordHashString;
use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S: Serializer>(
    hash: &PasswordHashString,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(hash.as_str())
}

pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<PasswordHashString, D::Error> {
    let raw = String::deserialize(deserializer)?;
    PasswordHashString::new(&raw)
        .map_err(|_| Error::invalid_value(
            Unexpected::Str(&raw),
            &"a PHC formatted password hash",
        ))
}
