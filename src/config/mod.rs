//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 0. Command-line flags passed as [`ConfigOverrides`]
//! 1. Environment variables (`THEME_LOADER_LISTING_URL`,
//!    `THEME_LOADER_DEFAULT_THEME`, `THEME_LOADER_STORE`,
//!    `THEME_LOADER_FETCH_TIMEOUT_SECS`).
//! 2. TOML file specified via --config CLI flag
//! 3. ./theme-loader.toml in the current directory
//! 4. $XDG_CONFIG_HOME/theme-loader/theme-loader.toml (or
//!    ~/.config/theme-loader/theme-loader.toml)
//! 5. Built-in defaults

mod defaults;
mod env;
mod loader;
mod overrides;
mod paths;
mod sources;
mod types;

pub use loader::{load_config, load_config_with_source};
pub use overrides::ConfigOverrides;
pub use paths::{config_root_dir, default_preferences_path};
pub use types::{
    CatalogConfig, CatalogKind, Config, ConfigSource, DiscoveryConfig, LoadedConfig,
    NetworkConfig, StorageConfig, ThemesConfig,
};
