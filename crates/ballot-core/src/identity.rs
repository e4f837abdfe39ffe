use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// The authenticated user's profile record, as returned by `GET /auth/me`.
///
/// Always re-derived from the current token; never persisted on its own.
/// The backend serializes the primary key as `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Identity {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub is_active: bool,
    /// Backend timestamp, kept verbatim for display.
    pub created_at: String,
}

impl Identity {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}
