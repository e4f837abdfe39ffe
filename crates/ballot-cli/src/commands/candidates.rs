use ballot_core::requests::{CandidateCreate, CandidateUpdate, FileUpload};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CandidateCommands;
use crate::cli::subcommands::candidates::CandidateDetailArgs;
use crate::commands::shared::files::read_upload;
use crate::commands::shared::parse::non_blank;
use crate::context::AppContext;
use crate::notify;
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `ballot candidates`.
pub async fn handle(
    action: &CandidateCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CandidateCommands::Add {
            election_id,
            name,
            details,
        } => {
            let candidate = CandidateCreate {
                name: name.trim().to_string(),
                bio: non_blank(details.bio.as_deref()),
                party: non_blank(details.party.as_deref()),
                position: non_blank(details.position.as_deref()),
                photo: load_photo(details).await?,
            };
            let election = with_spinner(
                "Adding candidate",
                ctx.api().add_candidate(election_id, &candidate),
            )
            .await?;
            notify::success(&format!("Candidate {} added", candidate.name));
            output(&election, flags.format)
        }
        CandidateCommands::Update {
            election_id,
            candidate_id,
            name,
            details,
        } => {
            let update = CandidateUpdate {
                name: non_blank(name.as_deref()),
                bio: non_blank(details.bio.as_deref()),
                party: non_blank(details.party.as_deref()),
                position: non_blank(details.position.as_deref()),
                photo: load_photo(details).await?,
            };
            let election = with_spinner(
                "Updating candidate",
                ctx.api().update_candidate(election_id, candidate_id, &update),
            )
            .await?;
            notify::success("Candidate updated");
            output(&election, flags.format)
        }
    }
}

async fn load_photo(details: &CandidateDetailArgs) -> anyhow::Result<Option<FileUpload>> {
    match &details.photo {
        Some(path) => Ok(Some(read_upload(path).await?)),
        None => Ok(None),
    }
}
