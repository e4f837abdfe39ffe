use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A roster entry. `student_id` is the institution's identifier; `id` is the
/// backend's primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Student {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub student_id: String,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
    pub is_active: bool,
    pub created_at: String,
}
