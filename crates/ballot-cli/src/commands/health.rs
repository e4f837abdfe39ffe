use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `ballot health`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let api = ctx.api();
    let status = with_spinner("Checking backend", api.health()).await?;
    tracing::debug!(status = %status.status, base_url = api.base_url(), "backend reachable");
    output(&status, flags.format)
}
