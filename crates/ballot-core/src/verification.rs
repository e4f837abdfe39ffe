//! Student eligibility check that gates voting.
//!
//! ```text
//! unverified → verified(data)
//!     ↑______________| reset
//! ```

use serde::Serialize;

use crate::entities::Student;
use crate::errors::CoreError;
use crate::responses::StudentValidation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Verification {
    #[default]
    Unverified,
    /// Checked and refused. Still unverified, but keeps the backend's reason.
    Rejected { reason: String },
    Verified(StudentValidation),
}

impl Verification {
    /// Fold a backend validation response into the workflow state.
    #[must_use]
    pub fn from_response(response: StudentValidation) -> Self {
        if response.is_valid {
            Self::Verified(response)
        } else {
            Self::Rejected {
                reason: response.message,
            }
        }
    }

    #[must_use]
    pub const fn is_verified(&self) -> bool {
        matches!(self, Self::Verified(_))
    }

    #[must_use]
    pub fn student(&self) -> Option<&Student> {
        match self {
            Self::Verified(data) => data.student.as_ref(),
            Self::Unverified | Self::Rejected { .. } => None,
        }
    }

    /// Drop any verification and start over with a different student id.
    pub fn reset(&mut self) {
        *self = Self::Unverified;
    }

    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] unless the state is `Verified`.
    pub fn require_verified(&self) -> Result<&StudentValidation, CoreError> {
        match self {
            Self::Verified(data) => Ok(data),
            Self::Rejected { reason } => Err(CoreError::validation(reason.clone())),
            Self::Unverified => Err(CoreError::validation(
                "Please verify your student ID before voting",
            )),
        }
    }
}
