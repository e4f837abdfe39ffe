//! Multi-call flows built on the endpoint methods.
//!
//! Batches are sequential: each call is awaited before the next one starts,
//! and a failing item never stops the rest.

use ballot_core::batch::BatchReport;
use ballot_core::entities::Election;
use ballot_core::requests::{CandidateCreate, ElectionCreate};
use ballot_core::verification::Verification;

use crate::{ApiClient, error::ApiError};

/// Shown when an election was created but could not be activated.
pub const ACTIVATION_WARNING: &str = "Election created but failed to activate. You can activate it manually from the admin dashboard.";

/// Result of [`ApiClient::setup_election`].
///
/// Creation succeeded; activation and candidate adds may have partially failed.
/// Nothing is rolled back.
#[derive(Debug, Clone)]
pub struct ElectionSetup {
    /// Latest known state of the election.
    pub election: Election,
    /// Why activation failed, when it was requested and did not succeed.
    pub activation_error: Option<String>,
    /// One outcome per requested candidate, labelled by candidate name.
    pub candidates: BatchReport<Election>,
}

impl ElectionSetup {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.activation_error.is_none() && self.candidates.is_complete_success()
    }
}

impl ApiClient {
    /// Add candidates one at a time, recording each outcome.
    pub async fn add_candidates(
        &self,
        election_id: &str,
        candidates: &[CandidateCreate],
    ) -> BatchReport<Election> {
        let mut report = BatchReport::new();
        for candidate in candidates {
            let result = self.add_candidate(election_id, candidate).await;
            if let Err(error) = &result {
                tracing::warn!(election_id, candidate = %candidate.name, %error, "failed to add candidate");
            }
            report.record(candidate.name.clone(), result);
        }
        tracing::debug!(
            election_id,
            added = report.succeeded(),
            failed = report.failed(),
            "candidate batch finished"
        );
        report
    }

    /// Create an election, optionally activate it, then add its candidates.
    ///
    /// Every candidate is checked for a name before anything is created.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] only when validation or the create call fails.
    /// Later failures are reported in the returned [`ElectionSetup`].
    pub async fn setup_election(
        &self,
        request: &ElectionCreate,
        candidates: &[CandidateCreate],
        activate: bool,
    ) -> Result<ElectionSetup, ApiError> {
        request.validate()?;
        for candidate in candidates {
            candidate.validate()?;
        }

        let mut election = self.create_election(request).await?;
        tracing::info!(election_id = %election.id, "election created");

        let mut activation_error = None;
        if activate {
            match self.activate_election(&election.id).await {
                Ok(activated) => election = activated,
                Err(error) => {
                    tracing::warn!(election_id = %election.id, %error, "failed to activate election");
                    activation_error = Some(error.to_string());
                }
            }
        }

        let report = self.add_candidates(&election.id, candidates).await;
        if let Some(latest) = report.last_value() {
            election = latest.clone();
        }

        Ok(ElectionSetup {
            election,
            activation_error,
            candidates: report,
        })
    }

    /// Check a student id against the roster.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for blank input without sending a request,
    /// otherwise any transport, status, or decode error. An ineligible student is
    /// not an error; it yields [`Verification::Rejected`].
    pub async fn verify_student(&self, student_id: &str) -> Result<Verification, ApiError> {
        let student_id = student_id.trim();
        if student_id.is_empty() {
            return Err(ApiError::validation("Please enter your student ID"));
        }
        let response = self.validate_student(student_id).await?;
        Ok(Verification::from_response(response))
    }
}
