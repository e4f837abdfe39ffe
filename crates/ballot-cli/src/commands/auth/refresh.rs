use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = with_spinner("Refreshing profile", ctx.session.refresh()).await?;
    output(&identity, flags.format)
}
