use ballot_client::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated: run `ballot auth login`")]
    NotAuthenticated,

    /// The backend (or client-side validation) refused the operation.
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("token store error: {0}")]
    TokenStore(String),

    #[error("{0}")]
    Other(String),
}
