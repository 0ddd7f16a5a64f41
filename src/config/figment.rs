use std::path::Path;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::Serialize;

pub trait FigmentExt {
    fn setup_app_config(
        self,
        config_file: impl AsRef<Path>,
        defaults: impl Serialize,
        env_prefix: &str,
    ) -> Figment;
}

impl FigmentExt for Figment {
    fn setup_app_config(
        self,
        config_file: impl AsRef<Path>,
        defaults: impl Serialize,
        env_prefix: &str,
    ) -> Figment {
        self.merge(Serialized::defaults(defaults))
            .merge(Toml::file_exact(config_file))
            .merge(Env::prefixed(env_prefix).global())
    }
}
