pub mod auth_config;
pub mod figment;
pub mod hasher_config;
pub mod notes_config;

pub use auth_config::AuthConfig;
pub use hasher_config::ProductionHasherConfigData;
pub use notes_config::NotesConfig;
