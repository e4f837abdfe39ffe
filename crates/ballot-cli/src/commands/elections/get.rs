use ballot_core::entities::{Election, VotingWindow};
use chrono::Utc;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Serialize)]
struct ElectionView {
    #[serde(flatten)]
    election: Election,
    voting: VotingWindow,
    voting_message: String,
    results_available: bool,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let election = with_spinner("Loading election", ctx.api().get_election(id)).await?;
    let voting = election.voting_window(Utc::now());

    output(
        &ElectionView {
            voting_message: voting.to_string(),
            results_available: election.can_view_results(),
            voting,
            election,
        },
        flags.format,
    )
}
