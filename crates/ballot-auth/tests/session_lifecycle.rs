//! Session store behaviour against an in-process fake backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ballot_auth::{
    AuthBackend, AuthError, GuardDecision, MemoryTokenStore, Route, SessionState, SessionStore,
    TokenStore, guard, guard_route,
};
use ballot_client::ApiError;
use ballot_core::enums::Role;
use ballot_core::identity::Identity;
use ballot_core::requests::{Credentials, SignupRequest, Token};
use pretty_assertions::assert_eq;

fn identity(role: Role) -> Identity {
    Identity {
        id: "1".into(),
        email: "a@x.com".into(),
        full_name: "A".into(),
        role,
        is_active: true,
        created_at: "...".into(),
    }
}

fn rejected(status: u16, message: &str) -> ApiError {
    ApiError::Status {
        status,
        message: message.into(),
    }
}

/// Accepts `password == "pw"` and issues token "abc". Profiles are looked up by token.
#[derive(Default)]
struct FakeBackend {
    profiles: Mutex<HashMap<String, Identity>>,
    signup_fails: bool,
    calls: Mutex<Vec<String>>,
}

impl FakeBackend {
    fn with_profile(token: &str, identity: Identity) -> Self {
        let backend = Self::default();
        backend.set_profile(token, identity);
        backend
    }

    fn set_profile(&self, token: &str, identity: Identity) {
        self.profiles
            .lock()
            .unwrap()
            .insert(token.to_string(), identity);
    }

    fn drop_profile(&self, token: &str) {
        self.profiles.lock().unwrap().remove(token);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthBackend for FakeBackend {
    async fn exchange_credentials(&self, credentials: &Credentials) -> Result<Token, ApiError> {
        self.calls.lock().unwrap().push("login".into());
        credentials.validate()?;
        if credentials.password == "pw" {
            Ok(Token {
                access_token: "abc".into(),
                token_type: "bearer".into(),
            })
        } else {
            Err(rejected(401, "Invalid credentials"))
        }
    }

    async fn register(&self, request: &SignupRequest) -> Result<Identity, ApiError> {
        self.calls.lock().unwrap().push("signup".into());
        if self.signup_fails {
            return Err(rejected(400, "Email already registered"));
        }
        Ok(Identity {
            email: request.email.clone(),
            full_name: request.full_name.clone(),
            ..identity(request.role.unwrap_or(Role::User))
        })
    }

    async fn fetch_identity(&self, token: &str) -> Result<Identity, ApiError> {
        self.calls.lock().unwrap().push(format!("me:{token}"));
        self.profiles
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or_else(|| rejected(401, "Could not validate credentials"))
    }
}

type Store = SessionStore<Arc<FakeBackend>, Arc<MemoryTokenStore>>;

fn session(backend: FakeBackend, tokens: MemoryTokenStore) -> (Store, Arc<FakeBackend>, Arc<MemoryTokenStore>) {
    let backend = Arc::new(backend);
    let tokens = Arc::new(tokens);
    (
        SessionStore::new(Arc::clone(&backend), Arc::clone(&tokens)),
        backend,
        tokens,
    )
}

#[tokio::test]
async fn starts_loading_and_resolves_anonymous_without_token() {
    let (mut store, backend, _) = session(FakeBackend::default(), MemoryTokenStore::new());
    assert_eq!(store.state(), &SessionState::Loading);
    assert_eq!(guard(store.state(), None), GuardDecision::Loading);

    assert_eq!(store.initialize().await, &SessionState::Anonymous);
    assert!(backend.calls().is_empty(), "no request without a token");
}

#[tokio::test]
async fn initialize_restores_valid_token() {
    let (mut store, _, _) = session(
        FakeBackend::with_profile("abc", identity(Role::Admin)),
        MemoryTokenStore::with_token("abc"),
    );
    store.initialize().await;
    assert_eq!(store.identity().map(|i| i.role), Some(Role::Admin));
    assert_eq!(store.token(), Some("abc"));
}

#[tokio::test]
async fn initialize_discards_rejected_token() {
    let (mut store, _, tokens) = session(FakeBackend::default(), MemoryTokenStore::with_token("stale"));
    assert_eq!(store.initialize().await, &SessionState::Anonymous);
    assert_eq!(tokens.load(), None);
    assert_eq!(store.token(), None);
}

#[tokio::test]
async fn initialize_runs_once() {
    let (mut store, backend, _) = session(
        FakeBackend::with_profile("abc", identity(Role::User)),
        MemoryTokenStore::with_token("abc"),
    );
    store.initialize().await;
    store.initialize().await;
    assert_eq!(backend.calls(), vec!["me:abc".to_string()]);
}

#[tokio::test]
async fn successful_login_persists_token_and_identity() {
    let (mut store, _, tokens) = session(
        FakeBackend::with_profile("abc", identity(Role::User)),
        MemoryTokenStore::new(),
    );
    store.initialize().await;

    let who = store.login("a@x.com", "pw").await.expect("login succeeds");
    assert_eq!(who, identity(Role::User));
    assert_eq!(store.state(), &SessionState::Authenticated(identity(Role::User)));
    assert_eq!(tokens.load().as_deref(), Some("abc"));
}

#[tokio::test]
async fn rejected_login_reports_backend_message() {
    let (mut store, _, tokens) = session(FakeBackend::default(), MemoryTokenStore::new());
    store.initialize().await;

    let err = store.login("a@x.com", "bad").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(store.state(), &SessionState::Anonymous);
    assert_eq!(tokens.load(), None);
}

#[tokio::test]
async fn profile_failure_after_login_leaves_no_token() {
    let (mut store, backend, tokens) = session(FakeBackend::default(), MemoryTokenStore::new());
    store.initialize().await;

    let err = store.login("a@x.com", "pw").await.unwrap_err();
    assert!(matches!(err, AuthError::Api(ref e) if e.is_unauthorized()));
    assert_eq!(store.state(), &SessionState::Anonymous);
    assert_eq!(store.token(), None);
    assert_eq!(tokens.load(), None);
    assert_eq!(backend.calls(), vec!["login".to_string(), "me:abc".to_string()]);
}

#[tokio::test]
async fn blank_password_is_a_validation_error() {
    let (mut store, backend, _) = session(FakeBackend::default(), MemoryTokenStore::new());
    let err = store.login("a@x.com", "").await.unwrap_err();
    assert!(matches!(err, AuthError::Api(ApiError::Validation(_))));
    assert_eq!(backend.calls(), vec!["login".to_string()]);
    assert_eq!(store.state(), &SessionState::Anonymous);
}

#[tokio::test]
async fn signup_then_login() {
    let (mut store, backend, tokens) = session(
        FakeBackend::with_profile("abc", identity(Role::User)),
        MemoryTokenStore::new(),
    );
    let request = SignupRequest {
        email: "a@x.com".into(),
        full_name: "A".into(),
        password: "pw".into(),
        role: None,
    };
    store.signup(&request).await.expect("signup succeeds");
    assert!(store.is_authenticated());
    assert_eq!(tokens.load().as_deref(), Some("abc"));
    assert_eq!(
        backend.calls(),
        vec!["signup".to_string(), "login".to_string(), "me:abc".to_string()]
    );
}

#[tokio::test]
async fn signup_with_failing_login_is_overall_failure() {
    let (mut store, _, tokens) = session(FakeBackend::default(), MemoryTokenStore::new());
    let request = SignupRequest {
        email: "a@x.com".into(),
        full_name: "A".into(),
        password: "not-pw".into(),
        role: None,
    };
    assert!(store.signup(&request).await.is_err());
    assert_eq!(store.state(), &SessionState::Anonymous);
    assert_eq!(tokens.load(), None);
}

#[tokio::test]
async fn rejected_signup_never_logs_in() {
    let backend = FakeBackend {
        signup_fails: true,
        ..FakeBackend::default()
    };
    let (mut store, backend, _) = session(backend, MemoryTokenStore::new());
    let request = SignupRequest {
        email: "a@x.com".into(),
        full_name: "A".into(),
        password: "pw".into(),
        role: None,
    };
    let err = store.signup(&request).await.unwrap_err();
    assert_eq!(err.to_string(), "Email already registered");
    assert_eq!(backend.calls(), vec!["signup".to_string()]);
}

#[tokio::test]
async fn logout_is_idempotent() {
    let (mut store, _, tokens) = session(
        FakeBackend::with_profile("abc", identity(Role::User)),
        MemoryTokenStore::with_token("abc"),
    );
    store.initialize().await;
    assert!(store.is_authenticated());

    store.logout();
    assert_eq!(store.state(), &SessionState::Anonymous);
    assert_eq!(tokens.load(), None);

    tokens.store("residual").unwrap();
    store.logout();
    assert_eq!(store.state(), &SessionState::Anonymous);
    assert_eq!(tokens.load(), None);
}

#[tokio::test]
async fn refresh_is_best_effort() {
    let (mut store, backend, _) = session(
        FakeBackend::with_profile("abc", identity(Role::User)),
        MemoryTokenStore::with_token("abc"),
    );
    store.initialize().await;

    backend.set_profile("abc", identity(Role::Admin));
    store.refresh().await.expect("refresh succeeds");
    assert_eq!(store.identity().map(|i| i.role), Some(Role::Admin));

    backend.drop_profile("abc");
    assert!(store.refresh().await.is_err());
    assert_eq!(
        store.identity().map(|i| i.role),
        Some(Role::Admin),
        "previous identity is kept"
    );
    assert!(store.is_authenticated());
}

#[tokio::test]
async fn refresh_without_token_is_not_authenticated() {
    let (mut store, _, _) = session(FakeBackend::default(), MemoryTokenStore::new());
    store.initialize().await;
    assert!(matches!(
        store.refresh().await,
        Err(AuthError::NotAuthenticated)
    ));
}

#[tokio::test]
async fn teardown_keeps_persisted_token() {
    let (mut store, _, tokens) = session(
        FakeBackend::with_profile("abc", identity(Role::User)),
        MemoryTokenStore::new(),
    );
    store.login("a@x.com", "pw").await.unwrap();
    store.teardown();
    assert_eq!(tokens.load().as_deref(), Some("abc"));
}

#[tokio::test]
async fn guard_follows_session_changes() {
    let (mut store, _, _) = session(
        FakeBackend::with_profile("abc", identity(Role::User)),
        MemoryTokenStore::new(),
    );
    store.initialize().await;
    let admin = Route::AdminDashboard;

    assert!(matches!(
        guard_route(store.state(), &admin),
        GuardDecision::Redirect { to: "/login", .. }
    ));

    store.login("a@x.com", "pw").await.unwrap();
    assert!(matches!(
        guard_route(store.state(), &admin),
        GuardDecision::Redirect { to: "/elections", .. }
    ));
    assert!(guard_route(store.state(), &Route::Vote("e1".into())).is_render());

    store.logout();
    assert!(matches!(
        guard_route(store.state(), &Route::Elections),
        GuardDecision::Redirect { to: "/login", .. }
    ));
}
