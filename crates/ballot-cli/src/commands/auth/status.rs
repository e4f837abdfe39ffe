use ballot_auth::expiry::decode_expiry;
use ballot_auth::nav::visible_items;
use ballot_auth::{SessionState, TokenStore};
use ballot_core::identity::Identity;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthStatusResponse {
    state: &'static str,
    user: Option<Identity>,
    menu: Vec<&'static str>,
    token_source: Option<String>,
    expires_at: Option<String>,
    note: Option<String>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let token_source = ctx
        .session
        .token()
        .and(ctx.session.token_store().source())
        .map(|source| source.to_string());
    let status = build_status(ctx.session.state(), ctx.session.token(), token_source);
    output(&status, flags.format)
}

fn build_status(
    state: &SessionState,
    token: Option<&str>,
    token_source: Option<String>,
) -> AuthStatusResponse {
    let (expires_at, note) = match token.map(decode_expiry) {
        Some(Ok(expiry)) => (Some(expiry.to_rfc3339()), None),
        Some(Err(error)) => (None, Some(format!("token expiry unknown: {error}"))),
        None => (None, Some("no valid token found".to_string())),
    };

    AuthStatusResponse {
        state: match state {
            SessionState::Loading => "loading",
            SessionState::Anonymous => "anonymous",
            SessionState::Authenticated(_) => "authenticated",
        },
        user: state.identity().cloned(),
        menu: visible_items(state).into_iter().map(|item| item.label()).collect(),
        token_source,
        expires_at,
        note,
    }
}
