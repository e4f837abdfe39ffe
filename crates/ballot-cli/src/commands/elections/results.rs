use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Show results, refusing until the election reaches `results_published`.
pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let api = ctx.api();
    let election = with_spinner("Loading election", api.get_election(id)).await?;
    if !election.can_view_results() {
        anyhow::bail!("Results for this election have not been published yet");
    }

    let results = with_spinner("Loading results", api.election_results(id)).await?;
    output(&results, flags.format)
}

pub async fn run_votes(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let votes = with_spinner("Loading votes", ctx.api().election_votes(id)).await?;
    output(&votes, flags.format)
}
