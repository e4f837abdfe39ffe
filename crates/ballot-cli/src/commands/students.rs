#[path = "students/import.rs"]
mod import;
#[path = "students/list.rs"]
mod list;
#[path = "students/manage.rs"]
mod manage;

use ballot_core::requests::StudentUpdate;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StudentCommands;
use crate::context::AppContext;

/// Handle `ballot students`.
pub async fn handle(
    action: &StudentCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StudentCommands::List {
            page,
            search,
            limit,
        } => list::run(*page, search.as_deref(), *limit, ctx, flags).await,
        StudentCommands::Count => list::run_count(ctx, flags).await,
        StudentCommands::Get { id } => manage::get(id, ctx, flags).await,
        StudentCommands::Create(args) => manage::create(args, ctx, flags).await,
        StudentCommands::Update {
            id,
            student_id,
            full_name,
            email,
            program,
            year,
            active,
        } => {
            let update = StudentUpdate {
                student_id: student_id.clone(),
                full_name: full_name.clone(),
                email: email.clone(),
                program: program.clone(),
                year: *year,
                is_active: *active,
            };
            manage::update(id, &update, ctx, flags).await
        }
        StudentCommands::Delete { id } => manage::delete(id, ctx, flags).await,
        StudentCommands::Validate { student_id } => manage::validate(student_id, ctx, flags).await,
        StudentCommands::Bulk { file, text } => {
            import::bulk(file.as_deref(), text.as_deref(), ctx, flags).await
        }
        StudentCommands::UploadCsv { path } => import::upload_csv(path, ctx, flags).await,
        StudentCommands::SampleCsv { output } => import::sample_csv(output.as_deref()).await,
    }
}
