use ballot_auth::{TokenSource, TokenStore};
use ballot_core::identity::Identity;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::notify;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Serialize)]
pub(super) struct AuthLoginResponse {
    pub authenticated: bool,
    pub user: Identity,
    pub token_source: Option<String>,
}

/// Warning shown when `BALLOT_AUTH__TOKEN` shadows whatever is stored.
pub(super) fn env_override_warning(source: Option<TokenSource>) -> Option<&'static str> {
    (source == Some(TokenSource::Env))
        .then_some("BALLOT_AUTH__TOKEN is set; later commands will use it instead of the stored token")
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let identity = with_spinner("Logging in", ctx.session.login(&args.email, &args.password)).await?;
    notify::success(&format!("Logged in as {} ({})", identity.email, identity.role));

    let source = ctx.session.token_store().source();
    if let Some(warning) = env_override_warning(source) {
        notify::warning(warning);
    }

    output(
        &AuthLoginResponse {
            authenticated: true,
            user: identity,
            token_source: source.map(|s| s.to_string()),
        },
        flags.format,
    )
}
