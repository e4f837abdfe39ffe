use anyhow::Context;
use ballot_auth::{SessionStore, SystemTokenStore};
use ballot_client::ApiClient;
use ballot_config::BallotConfig;

/// The session store the binary runs with.
pub type Session = SessionStore<ApiClient, SystemTokenStore>;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: BallotConfig,
    pub session: Session,
}

impl AppContext {
    /// Build the HTTP client and token store, then validate any stored token.
    pub async fn init(config: BallotConfig) -> anyhow::Result<Self> {
        let client = ApiClient::new(&config.api).context("failed to build HTTP client")?;
        let store = SystemTokenStore::from_config(&config.auth);

        let mut session = SessionStore::new(client, store);
        let state = session.initialize().await;
        tracing::debug!(authenticated = state.is_authenticated(), "session initialized");

        Ok(Self { config, session })
    }

    /// Client carrying the current session token, if there is one.
    #[must_use]
    pub fn api(&self) -> ApiClient {
        let client = self.session.backend().clone();
        match self.session.token() {
            Some(token) => client.with_token(token),
            None => client,
        }
    }

    /// Release the session store. The stored token outlives the process.
    pub fn shutdown(self) {
        self.session.teardown();
    }
}
