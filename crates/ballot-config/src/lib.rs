//! # ballot-config
//!
//! Layered configuration loading for the Ballot client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`BALLOT_*` prefix, `__` as separator)
//! 2. Legacy `VITE_API_BASE_URL` (maps to `api.base_url`)
//! 3. Project-level `.ballot/config.toml`
//! 4. User-level `~/.config/ballot/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `BALLOT_API__BASE_URL` -> `api.base_url`,
//! `BALLOT_AUTH__TOKEN` -> `auth.token`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use ballot_config::BallotConfig;
//!
//! let config = BallotConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.normalized_base_url());
//! ```

mod api;
mod auth;
mod error;
mod general;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use auth::{AuthConfig, DEFAULT_TOKEN_KEY};
pub use error::ConfigError;
pub use general::GeneralConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Env var the browser build used for the API base path.
pub const LEGACY_BASE_URL_ENV: &str = "VITE_API_BASE_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BallotConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl BallotConfig {
    /// Load configuration from TOML files and environment variables, then validate it.
    ///
    /// Does NOT call `dotenvy`; use [`BallotConfig::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        tracing::debug!(base_url = config.api.normalized_base_url(), "config loaded");
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`BallotConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".ballot/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
            .merge(
                Env::raw()
                    .only(&[LEGACY_BASE_URL_ENV])
                    .map(|_| "api.base_url".into()),
            )
            .merge(Env::prefixed("BALLOT_").split("__"))
    }

    /// Replace the API base URL, e.g. from a `--api-url` flag.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the new URL is not http(s).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        self.api.base_url = base_url.into();
        self.api.validate()?;
        Ok(self)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ballot").join("config.toml"))
    }
}
