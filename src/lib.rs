pub mod access_token;
pub mod bin_constants;
pub mod config;
pub mod data;
pub mod email_string;
pub mod hasher;
mod lib_constants;
pub mod logging;
pub mod note_store;
pub mod rng;
pub mod serde;
pub mod user_db;
pub mod util;

pub use lib_constants::MIN_PASSWORD_LEN;
