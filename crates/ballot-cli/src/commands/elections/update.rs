use ballot_core::requests::ElectionUpdate;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::elections::ElectionUpdateArgs;
use crate::commands::shared::parse::{non_blank, parse_optional_time};
use crate::context::AppContext;
use crate::notify;
use crate::output::output;
use crate::progress::with_spinner;

pub async fn run(
    args: &ElectionUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = ElectionUpdate {
        title: non_blank(args.title.as_deref()),
        description: args.description.clone(),
        start_time: parse_optional_time(args.start.as_deref(), "start_time")?,
        end_time: parse_optional_time(args.end.as_deref(), "end_time")?,
        status: None,
    };
    if let (Some(start), Some(end)) = (update.start_time, update.end_time)
        && end <= start
    {
        anyhow::bail!("End time must be after start time");
    }

    let election = with_spinner(
        "Updating election",
        ctx.api().update_election(&args.id, &update),
    )
    .await?;
    notify::success("Election updated successfully");
    output(&election, flags.format)
}
