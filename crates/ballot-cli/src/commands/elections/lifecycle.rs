use ballot_core::enums::ElectionAction;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::notify;
use crate::output::output;
use crate::progress::with_spinner;

/// Move an election one step along `draft → active → ended → results_published`.
///
/// The current status is fetched first so a backwards or skipping transition
/// is refused before the action request is sent.
pub async fn run(
    id: &str,
    action: ElectionAction,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let api = ctx.api();
    let current = with_spinner("Loading election", api.get_election(id)).await?;
    action.check(id, current.status)?;

    let election = with_spinner(
        &format!("Applying {action}"),
        api.apply_election_action(id, action),
    )
    .await?;
    notify::success(success_message(action));
    output(&election, flags.format)
}

const fn success_message(action: ElectionAction) -> &'static str {
    match action {
        ElectionAction::Activate => "Election activated successfully",
        ElectionAction::End => "Election ended successfully",
        ElectionAction::PublishResults => "Results published successfully",
    }
}
