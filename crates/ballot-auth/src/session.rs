//! Session store: the single record of whether, and as whom, the user is logged in.
//!
//! ```text
//! loading ──initialize──▶ anonymous ◀──logout── authenticated
//!    │                       │ login/signup          ▲
//!    └──────initialize───────┴───────────────────────┘
//! ```
//!
//! All mutation goes through `&mut self`, so an operation always completes
//! before the next one observes the state.

use ballot_core::identity::Identity;
use ballot_core::requests::{Credentials, SignupRequest};
use serde::Serialize;

use crate::backend::AuthBackend;
use crate::error::AuthError;
use crate::token_store::TokenStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// Startup validation has not finished.
    Loading,
    Anonymous,
    Authenticated(Identity),
}

impl SessionState {
    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Loading | Self::Anonymous => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

pub struct SessionStore<B, S> {
    backend: B,
    store: S,
    state: SessionState,
    token: Option<String>,
    initialized: bool,
}

impl<B: AuthBackend, S: TokenStore> SessionStore<B, S> {
    pub const fn new(backend: B, store: S) -> Self {
        Self {
            backend,
            store,
            state: SessionState::Loading,
            token: None,
            initialized: false,
        }
    }

    /// Validate any persisted token against the backend.
    ///
    /// Runs once; later calls return the current state untouched. A token
    /// that fails validation for any reason is discarded.
    pub async fn initialize(&mut self) -> &SessionState {
        if self.initialized {
            tracing::debug!("session already initialized");
            return &self.state;
        }
        self.initialized = true;

        let Some(token) = self.store.load() else {
            tracing::debug!("no stored token; starting anonymous");
            self.state = SessionState::Anonymous;
            return &self.state;
        };

        match self.backend.fetch_identity(&token).await {
            Ok(identity) => {
                tracing::info!(user = %identity.email, role = %identity.role, "session restored");
                self.token = Some(token);
                self.state = SessionState::Authenticated(identity);
            }
            Err(error) => {
                tracing::warn!(%error, "stored token rejected; discarding");
                self.discard_persisted();
                self.token = None;
                self.state = SessionState::Anonymous;
            }
        }
        &self.state
    }

    /// Exchange credentials for a token, then load the profile it belongs to.
    ///
    /// The token is persisted only once both steps succeed. Any earlier
    /// session is dropped first, so a failure always ends anonymous.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Api`] if either request fails (blank fields are
    /// rejected before any request), or [`AuthError::TokenStore`] if the token
    /// cannot be persisted.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Identity, AuthError> {
        self.login_with(&Credentials::new(email, password)).await
    }

    async fn login_with(&mut self, credentials: &Credentials) -> Result<Identity, AuthError> {
        self.initialized = true;
        self.reset();

        let token = self
            .backend
            .exchange_credentials(credentials)
            .await
            .inspect_err(|error| tracing::info!(%error, "login rejected"))?;
        let identity = self
            .backend
            .fetch_identity(&token.access_token)
            .await
            .inspect_err(|error| tracing::warn!(%error, "profile fetch after login failed"))?;

        self.store.store(&token.access_token)?;
        tracing::info!(user = %identity.email, role = %identity.role, "logged in");
        self.token = Some(token.access_token);
        self.state = SessionState::Authenticated(identity.clone());
        Ok(identity)
    }

    /// Register an account, then log in with the same credentials.
    ///
    /// # Errors
    ///
    /// Returns the registration error, or the follow-up login error; either
    /// way the session ends anonymous.
    pub async fn signup(&mut self, request: &SignupRequest) -> Result<Identity, AuthError> {
        self.initialized = true;
        self.reset();

        let created = self
            .backend
            .register(request)
            .await
            .inspect_err(|error| tracing::info!(%error, "signup rejected"))?;
        tracing::info!(user = %created.email, "account created");

        self.login_with(&request.credentials()).await
    }

    /// Forget the token and identity. Safe to call in any state.
    pub fn logout(&mut self) {
        self.initialized = true;
        self.reset();
        tracing::info!("logged out");
    }

    /// Re-fetch the profile for the current token.
    ///
    /// On failure the previous identity stays in place.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] without a token, otherwise the
    /// profile fetch error.
    pub async fn refresh(&mut self) -> Result<Identity, AuthError> {
        let Some(token) = self.token.clone() else {
            return Err(AuthError::NotAuthenticated);
        };
        match self.backend.fetch_identity(&token).await {
            Ok(identity) => {
                tracing::debug!(user = %identity.email, "profile refreshed");
                self.state = SessionState::Authenticated(identity.clone());
                Ok(identity)
            }
            Err(error) => {
                tracing::warn!(%error, "profile refresh failed; keeping previous identity");
                Err(error.into())
            }
        }
    }

    /// End of the store's lifecycle. The persisted token is kept so the next
    /// process can resume the session.
    pub fn teardown(self) {
        tracing::debug!(
            authenticated = self.state.is_authenticated(),
            "session store torn down"
        );
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        self.state.identity()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub const fn token_store(&self) -> &S {
        &self.store
    }

    fn reset(&mut self) {
        self.discard_persisted();
        self.token = None;
        self.state = SessionState::Anonymous;
    }

    fn discard_persisted(&self) {
        if let Err(error) = self.store.clear() {
            tracing::warn!(%error, "failed to clear stored token");
        }
    }
}
