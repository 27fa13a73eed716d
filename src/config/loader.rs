//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::env::apply_runtime_env_overrides;
use super::overrides::{apply_cli_overrides, ConfigOverrides};
use super::paths::config_root_dir;
use super::sources::read_config_text_with_sources;
use super::{CatalogKind, Config, LoadedConfig};

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    Ok(load_config_with_source(path_override, &ConfigOverrides::default())?.config)
}

/// Load configuration and report which source supplied it.
///
/// `overrides` are applied last, before validation.
pub fn load_config_with_source(
    path_override: Option<&str>,
    overrides: &ConfigOverrides,
) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        overrides,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    overrides: &ConfigOverrides,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let mut config: Config = toml::from_str(&config_text)?;
    apply_runtime_env_overrides(&mut config, &env_lookup)?;
    apply_cli_overrides(&mut config, overrides);
    normalize_and_validate(&mut config)?;
    Ok(LoadedConfig { config, source })
}

/// Trim user-facing strings and reject values discovery cannot work with.
pub(super) fn normalize_and_validate(config: &mut Config) -> Result<(), ConfigError> {
    config.themes.default = required(&config.themes.default, "themes.default")?;
    config.themes.extension = required(&config.themes.extension, "themes.extension")?;
    // Folder is a literal prefix; only surrounding whitespace is dropped.
    config.themes.folder = required(&config.themes.folder, "themes.folder")?;
    config.storage.key = required(&config.storage.key, "storage.key")?;
    config.catalog.url = config.catalog.url.trim().to_string();

    match config.catalog.kind {
        CatalogKind::Listing | CatalogKind::Manifest if config.catalog.url.is_empty() => {
            return Err(ConfigError::Invalid(
                "catalog.url is required for listing and manifest catalogs".to_string(),
            ));
        }
        _ => {}
    }
    if config.network.fetch_timeout_secs == Some(0) {
        config.network.fetch_timeout_secs = Some(1);
    }
    Ok(())
}

fn required(value: &str, field: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}
