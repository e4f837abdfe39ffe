//! Durable storage for the session token.
//!
//! [`SystemTokenStore`] reads, in order: the `BALLOT_AUTH__TOKEN` override,
//! the OS keyring, then a `0600` file under `~/.ballot/`. Writes go to the
//! keyring and fall back to the file. The env override is never written.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use ballot_config::AuthConfig;

use crate::error::AuthError;

/// Where a loaded token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Env,
    Keyring,
    File,
    Memory,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Env => "env",
            Self::Keyring => "keyring",
            Self::File => "file",
            Self::Memory => "memory",
        })
    }
}

/// Persistence for a single bearer token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`AuthError::TokenStore`] if the token cannot be persisted anywhere.
    fn store(&self, token: &str) -> Result<(), AuthError>;

    /// Remove any persisted token. Removing nothing is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenStore`] if an existing token cannot be removed.
    fn clear(&self) -> Result<(), AuthError>;

    fn source(&self) -> Option<TokenSource>;
}

// ---------------------------------------------------------------------------
// System store
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SystemTokenStore {
    service: String,
    key: String,
    use_keyring: bool,
    file_path: Option<PathBuf>,
    env_token: Option<String>,
}

impl SystemTokenStore {
    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            service: config.keyring_service.clone(),
            key: config.token_key.clone(),
            use_keyring: config.use_keyring,
            file_path: config.token_path(),
            env_token: config.token_override().map(str::to_string),
        }
    }

    /// File-backed store with no keyring and no env override.
    #[must_use]
    pub fn file_only(path: impl Into<PathBuf>) -> Self {
        Self {
            service: String::new(),
            key: String::new(),
            use_keyring: false,
            file_path: Some(path.into()),
            env_token: None,
        }
    }

    fn keyring_entry(&self) -> Option<keyring::Entry> {
        if !self.use_keyring {
            return None;
        }
        keyring::Entry::new(&self.service, &self.key)
            .inspect_err(|error| tracing::debug!(%error, "keyring unavailable"))
            .ok()
    }

    fn load_keyring(&self) -> Option<String> {
        self.keyring_entry()?
            .get_password()
            .ok()
            .filter(|t| !t.trim().is_empty())
    }

    fn file_path(&self) -> Result<&PathBuf, AuthError> {
        self.file_path.as_ref().ok_or_else(|| {
            AuthError::TokenStore("home directory not found: cannot store credentials".into())
        })
    }

    fn load_file(&self) -> Option<String> {
        let path = self.file_path.as_ref()?;
        fs::read_to_string(path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn store_file(&self, token: &str) -> Result<(), AuthError> {
        let path = self.file_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AuthError::TokenStore(format!("mkdir {}: {e}", parent.display())))?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(path, token)
            .map_err(|e| AuthError::TokenStore(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::TokenStore(format!("chmod {}: {e}", path.display())))?;
        }
        Ok(())
    }
}

impl TokenStore for SystemTokenStore {
    fn load(&self) -> Option<String> {
        self.env_token
            .clone()
            .or_else(|| self.load_keyring())
            .or_else(|| self.load_file())
    }

    fn store(&self, token: &str) -> Result<(), AuthError> {
        if let Some(entry) = self.keyring_entry() {
            match entry.set_password(token) {
                Ok(()) => return Ok(()),
                Err(error) => tracing::warn!(%error, "keyring store failed; falling back to file"),
            }
        }
        self.store_file(token)
    }

    fn clear(&self) -> Result<(), AuthError> {
        let keyring = self
            .keyring_entry()
            .map_or(Ok(()), |entry| keyring_cleared(entry.delete_credential()));
        if self.env_token.is_some() {
            tracing::debug!("token override is set in the environment and stays in effect");
        }
        if let Some(path) = &self.file_path
            && path.exists()
        {
            fs::remove_file(path).map_err(|e| {
                AuthError::TokenStore(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
        keyring
    }

    fn source(&self) -> Option<TokenSource> {
        if self.env_token.is_some() {
            Some(TokenSource::Env)
        } else if self.load_keyring().is_some() {
            Some(TokenSource::Keyring)
        } else if self.load_file().is_some() {
            Some(TokenSource::File)
        } else {
            None
        }
    }
}

/// A missing keyring entry counts as cleared.
fn keyring_cleared(result: keyring::Result<()>) -> Result<(), AuthError> {
    match result {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(error) => Err(AuthError::TokenStore(format!(
            "failed to delete keyring entry: {error}"
        ))),
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Process-local store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.lock().clone()
    }

    fn store(&self, token: &str) -> Result<(), AuthError> {
        *self.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        *self.lock() = None;
        Ok(())
    }

    fn source(&self) -> Option<TokenSource> {
        self.lock().as_ref().map(|_| TokenSource::Memory)
    }
}

impl<T: TokenStore + ?Sized> TokenStore for std::sync::Arc<T> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn store(&self, token: &str) -> Result<(), AuthError> {
        (**self).store(token)
    }

    fn clear(&self) -> Result<(), AuthError> {
        (**self).clear()
    }

    fn source(&self) -> Option<TokenSource> {
        (**self).source()
    }
}
