use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Elections { action } => commands::elections::handle(&action, ctx, flags).await,
        Commands::Candidates { action } => commands::candidates::handle(&action, ctx, flags).await,
        Commands::Students { action } => commands::students::handle(&action, ctx, flags).await,
        Commands::Health => commands::health::handle(ctx, flags).await,
    }
}
