//! The account operations the session store depends on.

use async_trait::async_trait;
use ballot_client::{ApiClient, ApiError};
use ballot_core::identity::Identity;
use ballot_core::requests::{Credentials, SignupRequest, Token};

/// Credential exchange, registration, and profile lookup.
///
/// [`ApiClient`] is the production implementation; tests drive the session
/// store with in-process fakes.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn exchange_credentials(&self, credentials: &Credentials) -> Result<Token, ApiError>;

    async fn register(&self, request: &SignupRequest) -> Result<Identity, ApiError>;

    /// Profile of the holder of `token`.
    async fn fetch_identity(&self, token: &str) -> Result<Identity, ApiError>;
}

#[async_trait]
impl AuthBackend for ApiClient {
    async fn exchange_credentials(&self, credentials: &Credentials) -> Result<Token, ApiError> {
        self.login(credentials).await
    }

    async fn register(&self, request: &SignupRequest) -> Result<Identity, ApiError> {
        self.signup(request).await
    }

    async fn fetch_identity(&self, token: &str) -> Result<Identity, ApiError> {
        self.clone().with_token(token).me().await
    }
}

#[async_trait]
impl<T: AuthBackend + ?Sized> AuthBackend for std::sync::Arc<T> {
    async fn exchange_credentials(&self, credentials: &Credentials) -> Result<Token, ApiError> {
        (**self).exchange_credentials(credentials).await
    }

    async fn register(&self, request: &SignupRequest) -> Result<Identity, ApiError> {
        (**self).register(request).await
    }

    async fn fetch_identity(&self, token: &str) -> Result<Identity, ApiError> {
        (**self).fetch_identity(token).await
    }
}
