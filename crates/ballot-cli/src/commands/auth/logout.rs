use ballot_auth::TokenStore;
use serde::Serialize;

use super::login::env_override_warning;
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::notify;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session.logout();

    match env_override_warning(ctx.session.token_store().source()) {
        Some(warning) => notify::warning(warning),
        None => notify::success("Logged out"),
    }

    output(&AuthLogoutResponse { cleared: true }, flags.format)
}
