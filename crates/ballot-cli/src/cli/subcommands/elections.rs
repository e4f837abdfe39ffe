use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Election commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ElectionCommands {
    /// List elections.
    List {
        /// Only elections that are currently active.
        #[arg(long)]
        active: bool,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get an election with its voting window.
    Get { id: String },
    /// Create an election, add its candidates, and activate it.
    Create(ElectionCreateArgs),
    /// Update election details.
    Update(ElectionUpdateArgs),
    /// Open a draft election for voting.
    Activate { id: String },
    /// Close voting on an active election.
    End { id: String },
    /// Publish the results of an ended election.
    Publish { id: String },
    /// Show published results.
    Results { id: String },
    /// Show the vote log of an election.
    Votes { id: String },
    /// Cast a vote on behalf of a verified student.
    Vote {
        id: String,
        /// Candidate ID to vote for.
        #[arg(long)]
        candidate: String,
        /// Student ID checked against the roster before voting.
        #[arg(long)]
        student_id: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ElectionCreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    /// Voting start, RFC 3339 or YYYY-MM-DDTHH:MM local time.
    #[arg(long)]
    pub start: String,
    /// Voting end, RFC 3339 or YYYY-MM-DDTHH:MM local time.
    #[arg(long)]
    pub end: String,
    /// Candidate name (repeatable).
    #[arg(long)]
    pub candidate: Vec<String>,
    /// JSON file with an array of candidates ({name, bio, party, position, photo}).
    /// Photo paths are relative to the file.
    #[arg(long)]
    pub candidates: Option<PathBuf>,
    /// Leave the election in draft instead of activating it.
    #[arg(long)]
    pub draft: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ElectionUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub start: Option<String>,
    #[arg(long)]
    pub end: Option<String>,
}
