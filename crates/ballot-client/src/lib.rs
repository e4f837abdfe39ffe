//! # ballot-client
//!
//! Typed client for the election backend REST API.
//!
//! One [`ApiClient`] method per endpoint, grouped by resource:
//! - [`auth`]: signup, login, current user, user lookup
//! - [`elections`]: listing, lifecycle actions, results, voting
//! - [`candidates`]: multipart candidate create/update
//! - [`students`]: roster CRUD, bulk/CSV import, eligibility checks
//! - [`health`]: liveness endpoints
//!
//! Multi-step flows built from those calls live in [`workflows`].

pub mod auth;
pub mod candidates;
pub mod elections;
pub mod health;
pub mod students;
pub mod workflows;

mod error;
mod http;

pub use error::ApiError;
pub use http::{FALLBACK_ERROR, extract_error_message};
pub use workflows::ElectionSetup;

use ballot_config::ApiConfig;

/// HTTP client bound to one backend base URL and, optionally, one bearer token.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authorized", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Build a client from API configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("ballot/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.normalized_base_url().to_string(),
            token: None,
        })
    }

    /// Build a client for a base URL with default settings.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::new`].
    pub fn from_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::new(&ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        })
    }

    /// Same client, authorized with `token`.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
