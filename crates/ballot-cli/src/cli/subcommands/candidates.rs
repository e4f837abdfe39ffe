use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Candidate commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CandidateCommands {
    /// Add a candidate to an election.
    Add {
        election_id: String,
        #[arg(long)]
        name: String,
        #[command(flatten)]
        details: CandidateDetailArgs,
    },
    /// Update a candidate of an election.
    Update {
        election_id: String,
        candidate_id: String,
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        details: CandidateDetailArgs,
    },
}

#[derive(Clone, Debug, Default, Args)]
pub struct CandidateDetailArgs {
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub party: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
    /// Path to a photo to upload.
    #[arg(long)]
    pub photo: Option<PathBuf>,
}
