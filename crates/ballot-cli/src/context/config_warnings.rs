use ballot_config::{BallotConfig, DEFAULT_BASE_URL};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &BallotConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &BallotConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    if config.api.base_url == DEFAULT_BASE_URL && has_single_underscore_key(&env_keys, "BALLOT_API")
    {
        warnings.push(
            "API config appears default while BALLOT_API* env vars exist. Use double underscores (example: BALLOT_API__BASE_URL)."
                .to_string(),
        );
    }

    if config.auth.token.is_none() && has_single_underscore_key(&env_keys, "BALLOT_AUTH") {
        warnings.push(
            "Auth config appears default while BALLOT_AUTH* env vars exist. Use double underscores (example: BALLOT_AUTH__TOKEN)."
                .to_string(),
        );
    }

    warnings
}

/// `BALLOT_API_BASE_URL` style keys: the section prefix followed by a single `_`.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(section)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
