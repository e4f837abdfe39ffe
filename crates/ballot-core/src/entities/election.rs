use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Candidate;
use crate::enums::ElectionStatus;

/// An election and its embedded candidate list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Election {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub status: ElectionStatus,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    #[schemars(with = "chrono::DateTime<chrono::Utc>")]
    pub start_time: DateTime<Utc>,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    #[schemars(with = "chrono::DateTime<chrono::Utc>")]
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub total_votes: u64,
}

impl Election {
    /// Where `now` falls relative to this election's voting period.
    #[must_use]
    pub fn voting_window(&self, now: DateTime<Utc>) -> VotingWindow {
        if self.status != ElectionStatus::Active {
            VotingWindow::NotActive {
                status: self.status,
            }
        } else if now < self.start_time {
            VotingWindow::NotStarted {
                starts_at: self.start_time,
            }
        } else if now > self.end_time {
            VotingWindow::Closed {
                ended_at: self.end_time,
            }
        } else {
            VotingWindow::Open
        }
    }

    /// Votes are accepted only while active and inside `[start_time, end_time]`.
    #[must_use]
    pub fn accepts_votes(&self, now: DateTime<Utc>) -> bool {
        self.voting_window(now) == VotingWindow::Open
    }

    #[must_use]
    pub fn can_view_results(&self) -> bool {
        self.status == ElectionStatus::ResultsPublished
    }

    /// Look up an embedded candidate by id.
    #[must_use]
    pub fn candidate(&self, candidate_id: &str) -> Option<&Candidate> {
        self.candidates
            .iter()
            .find(|c| c.id.as_deref() == Some(candidate_id))
    }
}

/// Voting availability of an election at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum VotingWindow {
    NotActive { status: ElectionStatus },
    NotStarted { starts_at: DateTime<Utc> },
    Open,
    Closed { ended_at: DateTime<Utc> },
}

impl fmt::Display for VotingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotActive { status } => write!(
                f,
                "Election is in \"{status}\" status. Only active elections allow voting."
            ),
            Self::NotStarted { starts_at } => write!(
                f,
                "Voting has not started yet. Voting starts on {}.",
                starts_at.format("%B %-d, %Y %H:%M UTC")
            ),
            Self::Closed { ended_at } => write!(
                f,
                "Voting has ended. Voting ended on {}.",
                ended_at.format("%B %-d, %Y %H:%M UTC")
            ),
            Self::Open => f.write_str("Voting is currently open!"),
        }
    }
}
