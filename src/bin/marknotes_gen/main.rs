use std::process::exit;
use clap::Parser;
use figment::Figment;
use log::{error, info, warn};
use marknotes::bin_constants::AUTHD_CONFIG_ENV_PREFIX;
use marknotes::config::AuthConfig;
use marknotes::config::figment::FigmentExt;
use marknotes::error_exit;
use marknotes::hasher::{Hasher, ProductionHasher, ProductionHasherConfig};
use marknotes::rng::SyncRng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rpassword::prompt_password;
use secret_generator::make_jwt_secret;
use crate::cli::CliConfig;

mod cli;
pub mod secret_generator;

fn main() {
    env_logger::init();

    let cli_config = CliConfig::parse();

    if !cli_config.config_file.exists() {
        error_exit!(
            "configuration file at {} does not exist",
            cli_config.config_file.display()
        )
    }

    let auth_config: AuthConfig = Figment::new()
        .setup_app_config(
            &cli_config.config_file,
            AuthConfig::default(),
            AUTHD_CONFIG_ENV_PREFIX,
        )
        .extract()
        .unwrap_or_else(|e| {
            for e in e {
                error!("{e}");
            }
            info!("finishing due to a configuration error");
            exit(1)
        });

    if cli_config.generate_jwt_secret {
        generate_jwt_secret(auth_config)
    } else {
        generate_hash(cli_config, auth_config)
    }
}

fn generate_hash(
    cli_config: CliConfig,
    auth_config: AuthConfig,
) {
    let argon2_params = auth_config.hasher_config.try_into()
        .unwrap_or_else(|e| error_exit!("hasher config is invalid: {}", e));
    let hasher = ProductionHasher::new(
        ProductionHasherConfig::new(argon2_params),
        SyncRng::new(StdRng::from_entropy()),
    );

    let read_value = prompt_password("Enter the password: ")
        .unwrap_or_else(|e| error_exit!("could not read password: {}", e));
    if read_value.is_empty() {
        error_exit!("entered password is empty")
    }

    if !cli_config.no_repeat {
        let confirmation_value = prompt_password("Repeat the password: ")
            .unwrap_or_else(|e| error_exit!("could not read password: {}", e));
        if confirmation_value != read_value {
            error_exit!("the passwords do not match")
        }
    }

    if read_value.trim() != read_value {
        warn!("the password has leading or trailing whitespace characters");
    }

    let hash = hasher.generate_hash(&read_value)
        .unwrap_or_else(|e| error_exit!("could not generate hash: {}", e));
    println!("{}", hash);
}

fn generate_jwt_secret(
    auth_config: AuthConfig,
) {
    make_jwt_secret(&auth_config.jwt_secret)
        .unwrap_or_else(|e| error_exit!("could not generate a jwt secret: {e}"));
}
