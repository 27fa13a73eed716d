//! Configuration data model.
//!
//! This module holds struct/enum definitions plus default values. Loading,
//! source precedence and validation live in the sibling modules.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_LISTING_URL, DEFAULT_PREFERENCE_KEY, DEFAULT_STYLESHEET_EXTENSION, DEFAULT_THEME,
    DEFAULT_THEMES_FOLDER,
};
use crate::theme::LinkPolicy;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub themes: ThemesConfig,
    pub catalog: CatalogConfig,
    pub discovery: DiscoveryConfig,
    pub storage: StorageConfig,
    pub network: NetworkConfig,
}

/// `[themes]`: naming and layout of theme assets.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemesConfig {
    /// Theme applied the first time no preference is stored.
    pub default: String,
    /// Prefix joined with each listed href to build the stylesheet address.
    pub folder: String,
    /// Case-sensitive suffix that marks a stylesheet asset.
    pub extension: String,
}

impl Default for ThemesConfig {
    fn default() -> Self {
        Self {
            default: DEFAULT_THEME.into(),
            folder: DEFAULT_THEMES_FOLDER.into(),
            extension: DEFAULT_STYLESHEET_EXTENSION.into(),
        }
    }
}

/// Which catalog implementation enumerates theme assets.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// Scrape an auto-index directory listing.
    #[default]
    Listing,
    /// Decode a JSON manifest.
    Manifest,
    /// Use `catalog.entries` verbatim.
    Static,
}

/// `[catalog]`: where theme assets are enumerated from.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    pub kind: CatalogKind,
    /// Listing or manifest address. Unused by the static catalog.
    pub url: String,
    /// Hrefs for the static catalog, relative to `themes.folder`.
    pub entries: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            kind: CatalogKind::Listing,
            url: DEFAULT_LISTING_URL.into(),
            entries: Vec::new(),
        }
    }
}

/// `[discovery]`: per-run behavior of theme activation.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Skip identifiers already activated by an earlier run.
    pub dedupe: bool,
    pub on_malformed: LinkPolicy,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            dedupe: true,
            on_malformed: LinkPolicy::Warn,
        }
    }
}

/// `[storage]`: persisted preference location.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Preference file; defaults to `~/.config/theme-loader/preferences.toml`.
    pub path: Option<PathBuf>,
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            key: DEFAULT_PREFERENCE_KEY.into(),
        }
    }
}

/// `[network]`: HTTP client settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NetworkConfig {
    /// No timeout is applied when unset.
    pub fetch_timeout_secs: Option<u64>,
}

/// Where the effective config text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Config loaded from explicit `--config` path.
    Explicit(PathBuf),
    /// Config loaded from `./theme-loader.toml`.
    Local,
    /// Config loaded from the per-user config directory.
    Global(PathBuf),
    /// No file found; built-in defaults were used.
    BuiltInDefaults,
}

/// Config plus the source it was read from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}
