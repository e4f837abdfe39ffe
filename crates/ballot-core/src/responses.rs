//! Response envelopes returned by the backend that are not full entities.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Student;
use crate::enums::ElectionStatus;

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// `POST /elections/{id}/vote` response.
pub type VoteReceipt = MessageResponse;

/// `GET /elections/{id}/results` response.
///
/// Per-candidate tallies are passed through as raw JSON; the backend owns
/// their shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ElectionResults {
    pub election_id: String,
    pub election_title: String,
    pub total_votes: u64,
    #[serde(default)]
    pub candidates: Vec<serde_json::Value>,
    pub status: ElectionStatus,
    pub end_time: String,
}

/// Result of `POST /students/bulk` and `POST /students/upload-csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ImportSummary {
    #[serde(default)]
    pub message: Option<String>,
    pub created: u64,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ImportSummary {
    /// One-line outcome, e.g. `Created 3 students (1 errors)`.
    #[must_use]
    pub fn describe(&self, verb: &str) -> String {
        if self.errors.is_empty() {
            format!("{verb} {} students", self.created)
        } else {
            format!(
                "{verb} {} students ({} errors)",
                self.created,
                self.errors.len()
            )
        }
    }
}

/// `GET /students/count` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StudentCount {
    pub count: u64,
}

/// `GET /students/validate/{studentId}` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StudentValidation {
    pub is_valid: bool,
    #[serde(default)]
    pub student: Option<Student>,
    pub message: String,
}

/// `GET /health` and `GET /` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_summary_describe() {
        let clean = ImportSummary {
            message: None,
            created: 3,
            errors: vec![],
        };
        assert_eq!(clean.describe("Created"), "Created 3 students");

        let partial = ImportSummary {
            message: Some("done".into()),
            created: 2,
            errors: vec!["Row 3: duplicate".into()],
        };
        assert_eq!(partial.describe("Uploaded"), "Uploaded 2 students (1 errors)");
    }

    #[test]
    fn validation_without_student() {
        let parsed: StudentValidation =
            serde_json::from_str(r#"{"is_valid":false,"message":"Student not found"}"#).unwrap();
        assert!(!parsed.is_valid);
        assert!(parsed.student.is_none());
    }
}
