use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;
use josekit::JoseError;
use josekit::jwk::Jwk;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MakeJwtSecretError {
    #[error("failed generating the jwt secret")]
    Generation(#[from] JoseError),

    #[error("jwt secret serialization failed")]
    Serialization(#[from] serde_json::Error),

    #[error("failed writing the generated jwt secret")]
    Io(#[from] io::Error),
}

const JWT_SECRET_LEN: u8 = 64;

/// Both daemons read this file, so it is written owner-only.
pub fn make_jwt_secret(
    jwt_secret: &Path,
) -> Result<(), MakeJwtSecretError> {
    let key = Jwk::generate_oct_key(JWT_SECRET_LEN)?;
    write(
        jwt_secret,
        serde_json::to_string_pretty(&key)? + "\n",
        0o600,
    )?;
    Ok(())
}

fn write(
    path: &Path,
    contents: impl AsRef<str>,
    mode: u32,
) -> Result<(), io::Error> {
    let mut file = OpenOptions::new()
        .mode(mode)
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(contents.as_ref().as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::os::unix::fs::PermissionsExt;
    use std::str::FromStr;
    use assert_fs::TempDir;
    use marknotes::access_token::{AccessTokenDecoder, AccessTokenGenerator};
    use marknotes::email_string::EmailString;
    use time::{Duration, OffsetDateTime};
    use uuid::Uuid;
    use super::*;

    #[test]
    fn generated_secret_signs_and_verifies_tokens() {
        let tmp = TempDir::new().unwrap();
        let secret_path = tmp.path().join("jwt_secret.jwk");
        make_jwt_secret(&secret_path).expect("secret generation failed");

        let generator = AccessTokenGenerator::from_file(&secret_path)
            .expect("generated secret did not load for signing");
        let decoder = AccessTokenDecoder::from_file(&secret_path)
            .expect("generated secret did not load for verification");

        let now = OffsetDateTime::now_utc();
        let token = generator
            .generate_token(
                Uuid::new_v4(),
                &EmailString::from_str("a@x.com").unwrap(),
                now,
                now + Duration::hours(24),
            )
            .unwrap();
        decoder.decode_token(&token).expect("roundtrip failed");
    }

    #[test]
    fn secret_file_is_owner_only() {
        let tmp = TempDir::new().unwrap();
        let secret_path = tmp.path().join("jwt_secret.jwk");
        make_jwt_secret(&secret_path).unwrap();

        let mode = std::fs::metadata(&secret_path).unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
