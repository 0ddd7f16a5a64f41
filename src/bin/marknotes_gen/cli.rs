use std::path::PathBuf;
use clap::Parser;
use marknotes::bin_constants::DEFAULT_AUTHD_CONFIG_FILE;

#[derive(Clone, Debug, Eq, Parser, PartialEq)]
#[command(version, author, about)]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_AUTHD_CONFIG_FILE)]
    pub config_file: PathBuf,

    /// Generate the shared jwt secret instead of hashing a password.
    #[arg(long, default_value_t = false)]
    pub generate_jwt_secret: bool,

    #[arg(long, short = 'y', default_value_t = false)]
    pub no_repeat: bool,
}
