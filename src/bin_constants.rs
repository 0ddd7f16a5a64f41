pub const DEFAULT_AUTHD_CONFIG_FILE: &str = "/etc/marknotes/authd.toml";
pub const DEFAULT_NOTESD_CONFIG_FILE: &str = "/etc/marknotes/notesd.toml";

pub const AUTHD_CONFIG_ENV_PREFIX: &str = "MARKNOTES_AUTHD_";
pub const NOTESD_CONFIG_ENV_PREFIX: &str = "MARKNOTES_NOTESD_";

pub const DEFAULT_USER_DB: &str = "/etc/marknotes/users";
pub const DEFAULT_JWT_SECRET: &str = "/etc/marknotes/jwt_secret.jwk";
pub const DEFAULT_NOTE_DB: &str = "/var/marknotes/notes.toml";
pub const DEFAULT_DATA_DIR: &str = "/var/marknotes/notes";
pub const DEFAULT_AUTH_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_VERIFY_TIMEOUT_MS: u64 = 5000;
