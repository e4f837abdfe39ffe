//! General application configuration.

use serde::{Deserialize, Serialize};

/// Rows per page in the student roster.
const fn default_page_size() -> u32 {
    20
}

/// `limit` sent on list requests when none is given.
const fn default_limit() -> u32 {
    100
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            default_limit: default_limit(),
        }
    }
}
