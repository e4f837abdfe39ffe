//! Election endpoints.

use ballot_core::entities::Election;
use ballot_core::enums::ElectionAction;
use ballot_core::requests::{ElectionCreate, ElectionUpdate, VoteRequest};
use ballot_core::responses::{ElectionResults, VoteReceipt};
use reqwest::Method;

use crate::{ApiClient, error::ApiError};

fn election_path(election_id: &str) -> String {
    format!("/elections/{}", urlencoding::encode(election_id))
}

impl ApiClient {
    /// `GET /elections/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a bad body.
    pub async fn list_elections(&self) -> Result<Vec<Election>, ApiError> {
        self.get_json("/elections/").await
    }

    /// `GET /elections/active`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a bad body.
    pub async fn active_elections(&self) -> Result<Vec<Election>, ApiError> {
        self.get_json("/elections/active").await
    }

    /// `POST /elections/`. New elections start as drafts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a blank title or an inverted voting
    /// period without sending a request.
    pub async fn create_election(&self, request: &ElectionCreate) -> Result<Election, ApiError> {
        request.validate()?;
        self.send_json(Method::POST, "/elections/", request).await
    }

    /// `GET /elections/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a bad body.
    pub async fn get_election(&self, election_id: &str) -> Result<Election, ApiError> {
        self.get_json(&election_path(election_id)).await
    }

    /// `PUT /elections/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for an empty update without sending a request.
    pub async fn update_election(
        &self,
        election_id: &str,
        update: &ElectionUpdate,
    ) -> Result<Election, ApiError> {
        if update.is_empty() {
            return Err(ApiError::validation("Nothing to update"));
        }
        self.send_json(Method::PUT, &election_path(election_id), update)
            .await
    }

    /// `POST /elections/{id}/{activate|end|publish-results}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a bad body.
    pub async fn apply_election_action(
        &self,
        election_id: &str,
        action: ElectionAction,
    ) -> Result<Election, ApiError> {
        tracing::debug!(election_id, %action, "election action");
        self.post_empty(&format!(
            "{}/{}",
            election_path(election_id),
            action.path_segment()
        ))
        .await
    }

    /// `POST /elections/{id}/activate`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::apply_election_action`].
    pub async fn activate_election(&self, election_id: &str) -> Result<Election, ApiError> {
        self.apply_election_action(election_id, ElectionAction::Activate)
            .await
    }

    /// `POST /elections/{id}/end`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::apply_election_action`].
    pub async fn end_election(&self, election_id: &str) -> Result<Election, ApiError> {
        self.apply_election_action(election_id, ElectionAction::End)
            .await
    }

    /// `POST /elections/{id}/publish-results`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::apply_election_action`].
    pub async fn publish_results(&self, election_id: &str) -> Result<Election, ApiError> {
        self.apply_election_action(election_id, ElectionAction::PublishResults)
            .await
    }

    /// `GET /elections/{id}/results`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a bad body.
    pub async fn election_results(&self, election_id: &str) -> Result<ElectionResults, ApiError> {
        self.get_json(&format!("{}/results", election_path(election_id)))
            .await
    }

    /// `GET /elections/{id}/votes`. Admin-only vote log, passed through untyped.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a bad body.
    pub async fn election_votes(
        &self,
        election_id: &str,
    ) -> Result<Vec<serde_json::Value>, ApiError> {
        self.get_json(&format!("{}/votes", election_path(election_id)))
            .await
    }

    /// `POST /elections/{id}/vote`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when no candidate is selected, without
    /// sending a request.
    pub async fn cast_vote(
        &self,
        election_id: &str,
        vote: &VoteRequest,
    ) -> Result<VoteReceipt, ApiError> {
        vote.validate()?;
        self.send_json(
            Method::POST,
            &format!("{}/vote", election_path(election_id)),
            vote,
        )
        .await
    }
}
