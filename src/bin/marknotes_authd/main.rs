mod access_granter;
pub mod app_constants;
mod app_setup;
mod cli;
mod routes;

use crate::cli::CliConfig;
use app_setup::AppSetupFairing;
use clap::{crate_name, Parser};
use figment::Figment;
use log::info;
use marknotes::bin_constants::AUTHD_CONFIG_ENV_PREFIX;
use marknotes::config::AuthConfig;
use marknotes::config::figment::FigmentExt;
use marknotes::error_exit;
use marknotes::logging::init_logging;

fn main() {
    init_logging(env!("CARGO_BIN_NAME"));

    info!("{} auth daemon starting up", crate_name!());

    let cli_config = CliConfig::parse();
    if !cli_config.config_file.exists() {
        error_exit!(
            "configuration file at {} does not exist",
            cli_config.config_file.display()
        )
    }
    let figment = Figment::from(rocket::Config::default())
        .setup_app_config(
            cli_config.config_file,
            AuthConfig::default(),
            AUTHD_CONFIG_ENV_PREFIX,
        );

    let result = rocket::execute(
        rocket
            ::custom(figment)
            .attach(AppSetupFairing::new())
            .launch()
    );
    if let Err(e) = result {
        error_exit!("failed to launch rocket: {}", e);
    }
}
