//! # ballot-auth
//!
//! Client-side session handling for the Ballot client.
//!
//! - [`session::SessionStore`]: who is logged in, with login/signup/logout/refresh
//! - [`token_store`]: token persistence (env override, OS keyring, `0600` file)
//! - [`guard`]: route table and access decisions
//! - [`nav`]: header entries per session state

pub mod backend;
pub mod error;
pub mod expiry;
pub mod guard;
pub mod nav;
pub mod session;
pub mod token_store;

pub use backend::AuthBackend;
pub use error::AuthError;
pub use guard::{GuardDecision, Route, guard, guard_route};
pub use session::{SessionState, SessionStore};
pub use token_store::{MemoryTokenStore, SystemTokenStore, TokenSource, TokenStore};
