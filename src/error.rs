//! Unified error types for theme loading.

use std::fmt;

// ---------------------------------------------------------------------------
// StorageError
// ---------------------------------------------------------------------------

/// Errors reading or writing the persisted preference store.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    /// The backing file exists but is not a valid key/value table.
    Corrupt(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Corrupt(msg) => write!(f, "corrupt preference store: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// CatalogError
// ---------------------------------------------------------------------------

/// Errors while enumerating theme assets.
#[derive(Debug)]
pub enum CatalogError {
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Non-2xx status from the catalog endpoint.
    Status(u16, String),
    /// A manifest body could not be decoded.
    Manifest(String),
    /// A listed link was malformed and the policy is to fail.
    MalformedLink(String),
}

impl CatalogError {
    /// HTTP status code, when the failure came from a non-2xx response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status(code, _) => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status(code, body) => write!(f, "status {code}: {body}"),
            Self::Manifest(msg) => write!(f, "invalid manifest: {msg}"),
            Self::MalformedLink(msg) => write!(f, "malformed theme link: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// LoaderError: top-level
// ---------------------------------------------------------------------------

/// Top-level error for the startup sequence.
#[derive(Debug)]
pub enum LoaderError {
    Config(ConfigError),
    Storage(StorageError),
    Catalog(CatalogError),
    /// Reading the host page or writing the rendered output failed.
    Output(std::io::Error),
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Storage(e) => write!(f, "storage: {e}"),
            Self::Catalog(e) => write!(f, "catalog: {e}"),
            Self::Output(e) => write!(f, "output: {e}"),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<ConfigError> for LoaderError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<StorageError> for LoaderError {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

impl From<CatalogError> for LoaderError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}
