use ballot_core::requests::{StudentCreate, StudentUpdate};
use ballot_core::verification::Verification;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::students::StudentFieldArgs;
use crate::commands::shared::parse::non_blank;
use crate::context::AppContext;
use crate::notify;
use crate::output::output;
use crate::progress::with_spinner;

pub async fn get(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let student = with_spinner("Loading student", ctx.api().get_student(id)).await?;
    output(&student, flags.format)
}

pub async fn create(
    args: &StudentFieldArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let student = StudentCreate {
        student_id: args.student_id.trim().to_string(),
        full_name: args.full_name.trim().to_string(),
        email: non_blank(args.email.as_deref()),
        program: non_blank(args.program.as_deref()),
        year: args.year,
    };
    let created = with_spinner("Adding student", ctx.api().create_student(&student)).await?;
    notify::success(&format!("Student {} added", created.student_id));
    output(&created, flags.format)
}

pub async fn update(
    id: &str,
    update: &StudentUpdate,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let student = with_spinner("Updating student", ctx.api().update_student(id, update)).await?;
    notify::success("Student updated");
    output(&student, flags.format)
}

pub async fn delete(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = with_spinner("Deleting student", ctx.api().delete_student(id)).await?;
    notify::success(&response.message);
    output(&response, flags.format)
}

/// Eligibility check. An ineligible student is reported, not treated as a failure.
pub async fn validate(student_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let verification =
        with_spinner("Validating student", ctx.api().verify_student(student_id)).await?;
    match &verification {
        Verification::Verified(data) => notify::success(&data.message),
        Verification::Rejected { reason } => notify::warning(reason),
        Verification::Unverified => {}
    }
    output(&verification, flags.format)
}
