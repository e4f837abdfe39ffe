use std::path::Path;

use anyhow::Context;
use ballot_core::requests::{BulkStudentCreate, FileUpload};
use ballot_core::responses::ImportSummary;
use ballot_core::roster;

use crate::cli::GlobalFlags;
use crate::commands::shared::files::read_text;
use crate::context::AppContext;
use crate::notify;
use crate::output::output;
use crate::progress::with_spinner;

/// Create students from header-less `student_id,full_name,...` lines.
pub async fn bulk(
    file: Option<&Path>,
    text: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let text = match (file, text) {
        (Some(path), _) => read_text(path).await?,
        (None, Some(text)) => text.to_string(),
        (None, None) => anyhow::bail!("provide --file or --text"),
    };

    let batch = BulkStudentCreate {
        students: roster::parse_bulk_lines(&text),
    };
    let summary = with_spinner(
        &format!("Creating {} students", batch.students.len()),
        ctx.api().bulk_create_students(&batch),
    )
    .await?;

    report(&summary, "Created");
    output(&summary, flags.format)
}

/// Check a roster CSV locally, then upload it. Nothing is sent if any row is invalid.
pub async fn upload_csv(path: &Path, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = read_text(path).await?;

    let check = roster::validate_csv(&text);
    if !check.is_valid {
        for error in &check.errors {
            notify::error(error);
        }
        output(&check, flags.format)?;
        anyhow::bail!(
            "CSV has {} invalid rows out of {}; nothing was uploaded",
            check.errors.len(),
            check.total_rows
        );
    }

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("students.csv");
    let upload = FileUpload::new(file_name, text.into_bytes()).with_content_type("text/csv");
    let summary = with_spinner(
        &format!("Uploading {} students", check.valid_rows),
        ctx.api().upload_students_csv(&upload),
    )
    .await?;

    report(&summary, "Uploaded");
    output(&summary, flags.format)
}

/// Print the example roster, or write it to `destination`.
pub async fn sample_csv(destination: Option<&Path>) -> anyhow::Result<()> {
    match destination {
        Some(path) => {
            tokio::fs::write(path, roster::SAMPLE_CSV)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            notify::success(&format!("Sample CSV written to {}", path.display()));
        }
        None => println!("{}", roster::SAMPLE_CSV),
    }
    Ok(())
}

fn report(summary: &ImportSummary, verb: &str) {
    for error in &summary.errors {
        notify::warning(error);
    }
    notify::success(&summary.describe(verb));
}
