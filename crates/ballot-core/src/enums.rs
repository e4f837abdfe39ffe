//! Roles, election statuses, and election lifecycle actions.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! [`ElectionStatus`] only moves forward; `allowed_next_states()` enforces
//! that at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Account role. Admins manage elections and the roster; users vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(CoreError::Parse {
                field: "role".into(),
                reason: format!("expected 'admin' or 'user', got '{other}'"),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// ElectionStatus
// ---------------------------------------------------------------------------

/// Lifecycle stage of an election as tracked by the backend.
///
/// ```text
/// draft → active → ended → results_published
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ElectionStatus {
    Draft,
    Active,
    Ended,
    ResultsPublished,
}

impl ElectionStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Draft => &[Self::Active],
            Self::Active => &[Self::Ended],
            Self::Ended => &[Self::ResultsPublished],
            Self::ResultsPublished => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// The admin action that advances an election out of this status, if any.
    #[must_use]
    pub const fn next_action(self) -> Option<ElectionAction> {
        match self {
            Self::Draft => Some(ElectionAction::Activate),
            Self::Active => Some(ElectionAction::End),
            Self::Ended => Some(ElectionAction::PublishResults),
            Self::ResultsPublished => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Ended => "ended",
            Self::ResultsPublished => "results_published",
        }
    }
}

impl fmt::Display for ElectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElectionStatus {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "draft" => Ok(Self::Draft),
            "active" => Ok(Self::Active),
            "ended" => Ok(Self::Ended),
            "results_published" => Ok(Self::ResultsPublished),
            other => Err(CoreError::Parse {
                field: "status".into(),
                reason: format!("unknown election status '{other}'"),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// ElectionAction
// ---------------------------------------------------------------------------

/// State transition endpoints exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ElectionAction {
    Activate,
    End,
    PublishResults,
}

impl ElectionAction {
    /// Path segment appended to `/elections/{id}/`.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Activate => "activate",
            Self::End => "end",
            Self::PublishResults => "publish-results",
        }
    }

    /// Status the election is in once the action succeeds.
    #[must_use]
    pub const fn target_status(self) -> ElectionStatus {
        match self {
            Self::Activate => ElectionStatus::Active,
            Self::End => ElectionStatus::Ended,
            Self::PublishResults => ElectionStatus::ResultsPublished,
        }
    }

    /// Status the election must be in for the action to be offered.
    #[must_use]
    pub const fn source_status(self) -> ElectionStatus {
        match self {
            Self::Activate => ElectionStatus::Draft,
            Self::End => ElectionStatus::Active,
            Self::PublishResults => ElectionStatus::Ended,
        }
    }

    /// Reject the action when the election is not in its source status.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] naming the current and target status.
    pub fn check(self, election_id: &str, current: ElectionStatus) -> Result<(), CoreError> {
        if current.can_transition_to(self.target_status()) {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                id: election_id.to_string(),
                from: current.to_string(),
                to: self.target_status().to_string(),
            })
        }
    }
}

impl fmt::Display for ElectionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}
