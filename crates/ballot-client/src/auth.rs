//! Account endpoints.

use ballot_core::identity::Identity;
use ballot_core::requests::{Credentials, SignupRequest, Token};
use reqwest::Method;

use crate::{ApiClient, error::ApiError};

impl ApiClient {
    /// `POST /auth/signup`. Registers an account; does not log in.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for missing fields without sending a request,
    /// otherwise any transport, status, or decode error.
    pub async fn signup(&self, request: &SignupRequest) -> Result<Identity, ApiError> {
        request.validate()?;
        self.send_json(Method::POST, "/auth/signup", request).await
    }

    /// `POST /auth/login`. Exchanges credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for an empty email or password without
    /// sending a request, otherwise any transport, status, or decode error.
    pub async fn login(&self, credentials: &Credentials) -> Result<Token, ApiError> {
        credentials.validate()?;
        self.send_json(Method::POST, "/auth/login", credentials).await
    }

    /// `GET /auth/me`. Profile of the token holder.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a bad body.
    pub async fn me(&self) -> Result<Identity, ApiError> {
        self.get_json("/auth/me").await
    }

    /// `GET /auth/users/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a bad body.
    pub async fn get_user(&self, user_id: &str) -> Result<Identity, ApiError> {
        self.get_json(&format!("/auth/users/{}", urlencoding::encode(user_id)))
            .await
    }
}
