//! Environment overrides.
//!
//! `THEME_LOADER_*` variables win over every file source.

use std::path::PathBuf;

use crate::error::ConfigError;

use super::Config;

pub(super) const ENV_LISTING_URL: &str = "THEME_LOADER_LISTING_URL";
pub(super) const ENV_DEFAULT_THEME: &str = "THEME_LOADER_DEFAULT_THEME";
pub(super) const ENV_STORE: &str = "THEME_LOADER_STORE";
pub(super) const ENV_FETCH_TIMEOUT_SECS: &str = "THEME_LOADER_FETCH_TIMEOUT_SECS";

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(url) = non_blank(env_lookup(ENV_LISTING_URL)) {
        config.catalog.url = url;
    }
    if let Some(theme) = non_blank(env_lookup(ENV_DEFAULT_THEME)) {
        config.themes.default = theme;
    }
    if let Some(path) = non_blank(env_lookup(ENV_STORE)) {
        config.storage.path = Some(PathBuf::from(path));
    }
    if let Some(timeout) = non_blank(env_lookup(ENV_FETCH_TIMEOUT_SECS)) {
        // Clamp to at least 1 second; an explicit zero would fail every request.
        let parsed = timeout.parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid {ENV_FETCH_TIMEOUT_SECS} value `{timeout}`: expected positive integer seconds"
            ))
        })?;
        config.network.fetch_timeout_secs = Some(parsed.max(1));
    }
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
