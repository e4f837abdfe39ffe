//! Session token storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Key the session token is stored under.
pub const DEFAULT_TOKEN_KEY: &str = "election_token";

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

fn default_keyring_service() -> String {
    "ballot".to_string()
}

const fn default_use_keyring() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Storage key for the persisted token (keyring user and file name).
    #[serde(default = "default_token_key")]
    pub token_key: String,

    /// Keyring service name.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Whether to try the OS keyring before the credentials file.
    #[serde(default = "default_use_keyring")]
    pub use_keyring: bool,

    /// Directory for the credentials file. Defaults to `~/.ballot`.
    #[serde(default)]
    pub credentials_dir: Option<PathBuf>,

    /// Read-only token override, usually from `BALLOT_AUTH__TOKEN`.
    #[serde(default)]
    pub token: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
            keyring_service: default_keyring_service(),
            use_keyring: default_use_keyring(),
            credentials_dir: None,
            token: None,
        }
    }
}

impl AuthConfig {
    /// Resolved credentials directory.
    #[must_use]
    pub fn credentials_dir(&self) -> Option<PathBuf> {
        self.credentials_dir
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(".ballot")))
    }

    /// Path of the token file inside the credentials directory.
    #[must_use]
    pub fn token_path(&self) -> Option<PathBuf> {
        self.credentials_dir().map(|dir| dir.join(&self.token_key))
    }

    /// Env token override, ignoring blank values.
    #[must_use]
    pub fn token_override(&self) -> Option<&str> {
        self.token.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}
