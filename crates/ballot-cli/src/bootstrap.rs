use anyhow::Context;
use ballot_config::BallotConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, TOML, and env configuration, then apply `--api-url`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<BallotConfig> {
    let config = BallotConfig::load_with_dotenv().context("failed to load configuration")?;
    match &flags.api_url {
        Some(url) => config
            .with_base_url(url.as_str())
            .context("invalid --api-url"),
        None => Ok(config),
    }
}
