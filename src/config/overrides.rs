//! Command-line overrides.
//!
//! Applied after environment variables and before validation, so a flag can
//! repair a blank or missing file value.

use std::path::PathBuf;

use super::Config;

/// Values supplied on the command line. `None` leaves the loaded value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub listing_url: Option<String>,
    pub default_theme: Option<String>,
    pub store: Option<PathBuf>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        self.listing_url.is_none() && self.default_theme.is_none() && self.store.is_none()
    }
}

pub(super) fn apply_cli_overrides(config: &mut Config, overrides: &ConfigOverrides) {
    if let Some(url) = non_blank(overrides.listing_url.as_deref()) {
        config.catalog.url = url;
    }
    if let Some(theme) = non_blank(overrides.default_theme.as_deref()) {
        config.themes.default = theme;
    }
    if let Some(store) = &overrides.store {
        config.storage.path = Some(store.clone());
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
