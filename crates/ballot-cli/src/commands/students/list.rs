use ballot_core::entities::Student;
use ballot_core::requests::StudentQuery;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Serialize)]
struct StudentCountResponse {
    count: u64,
}

/// List one 1-based page of the roster.
pub async fn run(
    page: u32,
    search: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let query = page_query(
        page,
        limit.or(flags.limit).unwrap_or(ctx.config.general.page_size),
        search,
    );
    tracing::debug!(skip = query.skip, limit = query.limit, "listing students");

    let students: Vec<Student> =
        with_spinner("Loading students", ctx.api().list_students(&query)).await?;
    output(&students, flags.format)
}

pub async fn run_count(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let count = with_spinner("Counting students", ctx.api().count_students()).await?;
    output(&StudentCountResponse { count }, flags.format)
}

fn page_query(page: u32, page_size: u32, search: Option<&str>) -> StudentQuery {
    StudentQuery::page(page.saturating_sub(1), page_size)
        .with_search(search.map(|s| s.trim().to_string()))
}
