use ballot_core::entities::{Election, VotingWindow};
use ballot_core::requests::VoteRequest;
use ballot_core::verification::Verification;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::notify;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Serialize)]
struct VoteView {
    election_id: String,
    candidate_id: String,
    student_id: String,
    message: String,
}

/// Check the voting window, verify the student, then cast the vote.
pub async fn run(
    id: &str,
    candidate_id: &str,
    student_id: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let api = ctx.api();
    let election = with_spinner("Loading election", api.get_election(id)).await?;
    check_ballot(&election, candidate_id, Utc::now())?;

    let verification: Verification =
        with_spinner("Verifying student", api.verify_student(student_id)).await?;
    let verified = verification.require_verified()?;
    let voter = verified
        .student
        .as_ref()
        .map_or_else(|| student_id.trim().to_string(), |s| s.full_name.clone());

    let vote = VoteRequest {
        candidate_id: candidate_id.to_string(),
    };
    let receipt = with_spinner("Casting vote", api.cast_vote(id, &vote)).await?;
    notify::success(&format!(
        "Thank you for participating in this election, {voter}!"
    ));

    output(
        &VoteView {
            election_id: election.id,
            candidate_id: vote.candidate_id,
            student_id: student_id.trim().to_string(),
            message: receipt.message,
        },
        flags.format,
    )
}

/// Refuse a ballot outside the voting window or for a candidate not on it.
fn check_ballot(election: &Election, candidate_id: &str, now: DateTime<Utc>) -> anyhow::Result<()> {
    match election.voting_window(now) {
        VotingWindow::Open => {}
        VotingWindow::NotActive { .. } => {
            anyhow::bail!("This election is not currently accepting votes")
        }
        window @ (VotingWindow::NotStarted { .. } | VotingWindow::Closed { .. }) => {
            anyhow::bail!("{window}")
        }
    }
    if election.candidate(candidate_id).is_none() {
        anyhow::bail!("Candidate '{candidate_id}' is not on this election's ballot");
    }
    Ok(())
}
