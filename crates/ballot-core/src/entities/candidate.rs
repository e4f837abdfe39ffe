use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A candidate embedded in an election record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Candidate {
    /// Absent on candidates that have not been persisted yet.
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}
