use std::time::Duration;
use async_trait::async_trait;
use log::{error, info};
use marknotes::config::NotesConfig;
use marknotes::note_store::{NoteStore, ProductionNoteStore};
use marknotes::rng::SyncRng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rocket::fairing::{Fairing, Info};
use rocket::{Build, Rocket};
use crate::routes::ApiRocketBuildExt;
use crate::token_verifier::{RemoteTokenVerifier, TokenVerifier};

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
        let config: NotesConfig = ok_or_bail!(
            rocket,
            rocket.figment().extract(),
            |e| {
                for e in e {
                    error!("{e}");
                }
                info!("finishing due to a config parse error");
            }
        );

        let note_store = ok_or_bail!(
            rocket,
            ProductionNoteStore::new(
                &config.note_db,
                config.data_directory.clone(),
                SyncRng::new(StdRng::from_entropy()),
            ).await,
            |e| error!("note store initialization failed: {e}")
        );

        let token_verifier = ok_or_bail!(
            rocket,
            RemoteTokenVerifier::new(
                &config.auth_base_url,
                Duration::from_millis(config.verify_timeout_ms),
            ),
            |e| error!("could not initialize the token verifier: {e}")
        );

        let note_store: Box<dyn NoteStore> = Box::new(note_store);
        let token_verifier: Box<dyn TokenVerifier> = Box::new(token_verifier);

        Ok(
            rocket
                .manage(note_store)
                .manage(token_verifier)
                .install_notes_api()
        )
    }
}
