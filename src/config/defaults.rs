//! Default configuration constants.

pub(super) const DEFAULT_THEME: &str = "arctic";
pub(super) const DEFAULT_THEMES_FOLDER: &str = "./themes/";
pub(super) const DEFAULT_STYLESHEET_EXTENSION: &str = ".css";
pub(super) const DEFAULT_LISTING_URL: &str = "http://127.0.0.1:8080/themes/";
pub(super) const DEFAULT_PREFERENCE_KEY: &str = "theme";

/// File name used for both local and global config lookups.
pub(super) const CONFIG_FILE_NAME: &str = "theme-loader.toml";
/// Directory under the config root owned by this tool.
pub(super) const CONFIG_DIR_NAME: &str = "theme-loader";
/// File name of the default preference store.
pub(super) const PREFERENCES_FILE_NAME: &str = "preferences.toml";
