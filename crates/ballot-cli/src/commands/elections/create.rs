use std::path::{Path, PathBuf};

use anyhow::Context;
use ballot_client::ElectionSetup;
use ballot_client::workflows::ACTIVATION_WARNING;
use ballot_core::batch::ItemOutcome;
use ballot_core::entities::Election;
use ballot_core::requests::{CandidateCreate, ElectionCreate, FileUpload};
use serde::{Deserialize, Serialize};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::elections::ElectionCreateArgs;
use crate::commands::shared::files::{read_text, read_upload};
use crate::commands::shared::parse::{non_blank, parse_time};
use crate::context::AppContext;
use crate::notify;
use crate::output::output;
use crate::progress::with_spinner;

/// One entry of a `--candidates` JSON file.
#[derive(Debug, Deserialize)]
struct CandidateSpec {
    name: String,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default)]
    party: Option<String>,
    #[serde(default)]
    position: Option<String>,
    /// Image path, relative to the candidates file unless absolute.
    #[serde(default)]
    photo: Option<PathBuf>,
}

impl CandidateSpec {
    fn photo_path(&self, base: &Path) -> Option<PathBuf> {
        self.photo.as_ref().map(|photo| base.join(photo))
    }

    fn into_request(self, photo: Option<FileUpload>) -> CandidateCreate {
        CandidateCreate {
            name: self.name.trim().to_string(),
            bio: non_blank(self.bio.as_deref()),
            party: non_blank(self.party.as_deref()),
            position: non_blank(self.position.as_deref()),
            photo,
        }
    }
}

#[derive(Debug, Serialize)]
struct CandidateOutcome {
    name: String,
    added: bool,
    error: Option<String>,
}

#[derive(Serialize)]
struct ElectionSetupView {
    election: Election,
    activation_error: Option<String>,
    candidates: Vec<CandidateOutcome>,
}

pub async fn run(
    args: &ElectionCreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = ElectionCreate {
        title: args.title.trim().to_string(),
        description: non_blank(args.description.as_deref()),
        start_time: parse_time(&args.start, "start_time")?,
        end_time: parse_time(&args.end, "end_time")?,
    };

    let mut candidates: Vec<CandidateCreate> = args
        .candidate
        .iter()
        .map(|name| CandidateCreate::named(name.trim()))
        .collect();
    if let Some(path) = &args.candidates {
        candidates.extend(load_candidates(path).await?);
    }

    let setup = with_spinner(
        "Creating election",
        ctx.api().setup_election(&request, &candidates, !args.draft),
    )
    .await?;

    report(&setup);
    output(&view(setup), flags.format)
}

async fn load_candidates(path: &Path) -> anyhow::Result<Vec<CandidateCreate>> {
    let text = read_text(path).await?;
    let specs = parse_candidates(&text)
        .with_context(|| format!("invalid candidates file {}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));

    let mut candidates = Vec::with_capacity(specs.len());
    for spec in specs {
        let photo = match spec.photo_path(base) {
            Some(photo) => Some(read_upload(&photo).await?),
            None => None,
        };
        candidates.push(spec.into_request(photo));
    }
    Ok(candidates)
}

fn parse_candidates(text: &str) -> anyhow::Result<Vec<CandidateSpec>> {
    Ok(serde_json::from_str(text)?)
}

fn report(setup: &ElectionSetup) {
    if setup.activation_error.is_some() {
        notify::warning(ACTIVATION_WARNING);
    }
    for (name, error) in setup.candidates.failures() {
        notify::warning(&format!("Failed to add candidate {name}: {error}"));
    }
    if setup.is_complete() {
        notify::success("Election created successfully");
    } else {
        notify::success(&format!(
            "Election created with {} of {} candidates",
            setup.candidates.succeeded(),
            setup.candidates.items.len()
        ));
    }
}

fn view(setup: ElectionSetup) -> ElectionSetupView {
    let candidates = setup
        .candidates
        .items
        .iter()
        .map(|item| match item {
            ItemOutcome::Succeeded { label, .. } => CandidateOutcome {
                name: label.clone(),
                added: true,
                error: None,
            },
            ItemOutcome::Failed { label, error } => CandidateOutcome {
                name: label.clone(),
                added: false,
                error: Some(error.clone()),
            },
        })
        .collect();

    ElectionSetupView {
        election: setup.election,
        activation_error: setup.activation_error,
        candidates,
    }
}
