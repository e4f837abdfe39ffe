//! Liveness endpoints. Neither requires a token.

use ballot_core::responses::HealthStatus;

use crate::{ApiClient, error::ApiError};

impl ApiClient {
    /// `GET /health`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a bad body.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json("/health").await
    }

    /// `GET /`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a bad body.
    pub async fn root(&self) -> Result<HealthStatus, ApiError> {
        self.get_json("/").await
    }
}
