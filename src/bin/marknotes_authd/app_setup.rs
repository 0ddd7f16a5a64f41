use async_trait::async_trait;
use log::{error, info};
use marknotes::access_token::{AccessTokenDecoder, AccessTokenGenerator};
use marknotes::config::AuthConfig;
use marknotes::hasher::{ProductionHasher, ProductionHasherConfig};
use marknotes::rng::SyncRng;
use marknotes::user_db::ProductionUserDb;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rocket::fairing::{Fairing, Info};
use rocket::{Build, Rocket};
use crate::access_granter::AccessGranter;
use crate::routes::ApiRocketBuildExt;

pub struct AppSetupFairing;

impl AppSetupFairing {
    pub fn new() -> Self {
        AppSetupFairing
    }
}

macro_rules! ok_or_bail {
    ($rocket:ident, $expr:expr, |$e:ident| $error_logger:expr) => ({
        match $expr {
            std::result::Result::Ok(ok) => ok,
            std::result::Result::Err(e) => {
                let $e = e;
                $error_logger;
                return std::result::Result::Err($rocket);
            },
        }
    });
}

#[async_trait]
impl Fairing for AppSetupFairing {
    fn info(&self) -> Info {
        use rocket::fairing::Kind;
        Info {
            name: "app setup",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(
        &self,
        rocket: Rocket<Build>,
    ) -> rocket::fairing::Result {
        let config: AuthConfig = ok_or_bail!(
            rocket,
            rocket.figment().extract(),
            |e| {
                for e in e {
                    error!("{e}");
                }
                info!("finishing due to a config parse error");
            }
        );

        let argon2_params: argon2::Params = ok_or_bail!(
            rocket,
            config.hasher_config.clone().try_into(),
            |e| error!("invalid hasher configuration: {e}")
        );
        let rng = SyncRng::new(StdRng::from_entropy());
        let hasher = ProductionHasher::new(
            ProductionHasherConfig::new(argon2_params),
            rng.clone(),
        );

        let user_db = ok_or_bail!(
            rocket,
            ProductionUserDb::new(&config.user_db, hasher, rng).await,
            |e| error!("user db initialization failed: {e}")
        );

        let access_token_generator = ok_or_bail!(
            rocket,
            AccessTokenGenerator::from_file(&config.jwt_secret),
            |e| error!("could not initialize access token generator: {e}")
        );
        let access_token_decoder = ok_or_bail!(
            rocket,
            AccessTokenDecoder::from_file(&config.jwt_secret),
            |e| error!("could not initialize access token decoder: {e}")
        );

        let access_granter = AccessGranter::new(
            Box::new(user_db),
            access_token_generator,
            access_token_decoder,
        );

        Ok(
            rocket
                .manage(access_granter)
                .install_auth_api()
        )
    }
}
