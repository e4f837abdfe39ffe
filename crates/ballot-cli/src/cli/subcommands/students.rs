use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Student roster commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudentCommands {
    /// List students one page at a time.
    List {
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        search: Option<String>,
        /// Page size (defaults to general.page_size).
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Count students on the roster.
    Count,
    /// Get a student by record ID.
    Get { id: String },
    /// Add a student.
    Create(StudentFieldArgs),
    /// Update a student by record ID.
    Update {
        id: String,
        #[arg(long)]
        student_id: Option<String>,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        program: Option<String>,
        #[arg(long)]
        year: Option<u32>,
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a student by record ID.
    Delete { id: String },
    /// Add many students from `student_id,full_name,email,program,year` lines.
    Bulk {
        #[arg(long, conflicts_with = "text", required_unless_present = "text")]
        file: Option<PathBuf>,
        #[arg(long)]
        text: Option<String>,
    },
    /// Check a roster CSV and upload it.
    #[command(name = "upload-csv")]
    UploadCsv { path: PathBuf },
    /// Check whether a student may vote.
    Validate { student_id: String },
    /// Print (or write) an example roster CSV.
    #[command(name = "sample-csv")]
    SampleCsv {
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Debug, Args)]
pub struct StudentFieldArgs {
    #[arg(long)]
    pub student_id: String,
    #[arg(long)]
    pub full_name: String,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub program: Option<String>,
    #[arg(long)]
    pub year: Option<u32>,
}
