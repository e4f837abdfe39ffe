use ballot_core::entities::Election;
use ballot_core::enums::ElectionStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

pub async fn run(
    active: bool,
    status: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let api = ctx.api();
    let mut elections: Vec<Election> = if active {
        with_spinner("Loading active elections", api.active_elections()).await?
    } else {
        with_spinner("Loading elections", api.list_elections()).await?
    };

    if let Some(status) = status {
        let status = parse_enum::<ElectionStatus>(status, "status")?;
        elections.retain(|election| election.status == status);
    }
    if let Some(limit) = limit.or(flags.limit) {
        elections.truncate(usize::try_from(limit)?);
    }

    output(&elections, flags.format)
}
