use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenVerifierError {
    #[error("token rejected by the auth daemon")]
    Rejected,

    #[error("auth daemon unavailable")]
    Unavailable,

    #[error(transparent)]
    Client(#[from] reqwest::Error),
}
