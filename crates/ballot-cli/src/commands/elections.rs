#[path = "elections/create.rs"]
mod create;
#[path = "elections/get.rs"]
mod get;
#[path = "elections/lifecycle.rs"]
mod lifecycle;
#[path = "elections/list.rs"]
mod list;
#[path = "elections/results.rs"]
mod results;
#[path = "elections/update.rs"]
mod update;
#[path = "elections/vote.rs"]
mod vote;

use ballot_core::enums::ElectionAction;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ElectionCommands;
use crate::context::AppContext;

/// Handle `ballot elections`.
pub async fn handle(
    action: &ElectionCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ElectionCommands::List {
            active,
            status,
            limit,
        } => list::run(*active, status.as_deref(), *limit, ctx, flags).await,
        ElectionCommands::Get { id } => get::run(id, ctx, flags).await,
        ElectionCommands::Create(args) => create::run(args, ctx, flags).await,
        ElectionCommands::Update(args) => update::run(args, ctx, flags).await,
        ElectionCommands::Activate { id } => {
            lifecycle::run(id, ElectionAction::Activate, ctx, flags).await
        }
        ElectionCommands::End { id } => lifecycle::run(id, ElectionAction::End, ctx, flags).await,
        ElectionCommands::Publish { id } => {
            lifecycle::run(id, ElectionAction::PublishResults, ctx, flags).await
        }
        ElectionCommands::Results { id } => results::run(id, ctx, flags).await,
        ElectionCommands::Votes { id } => results::run_votes(id, ctx, flags).await,
        ElectionCommands::Vote {
            id,
            candidate,
            student_id,
        } => vote::run(id, candidate, student_id, ctx, flags).await,
    }
}
