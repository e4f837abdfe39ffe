use ballot_auth::TokenStore;
use ballot_core::enums::Role;
use ballot_core::requests::SignupRequest;

use super::login::{AuthLoginResponse, env_override_warning};
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthSignupArgs;
use crate::context::AppContext;
use crate::notify;
use crate::output::output;
use crate::progress::with_spinner;

pub async fn handle(
    args: &AuthSignupArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let role = args.role.as_deref().map(str::parse::<Role>).transpose()?;
    let request = SignupRequest {
        email: args.email.trim().to_string(),
        full_name: args.full_name.trim().to_string(),
        password: args.password.clone(),
        role,
    };

    let identity = with_spinner("Creating account", ctx.session.signup(&request)).await?;
    notify::success(&format!("Account created for {}", identity.email));

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
