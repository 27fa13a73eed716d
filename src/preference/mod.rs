//! Persisted theme preference and first-run default.
//!
//! [`PreferenceGate::resolve`] makes sure a preference exists: the first run
//! stores and applies the configured default, later runs leave the stored
//! value alone for the theme-switching code to apply.

mod store;

pub use store::{FileStore, MemoryStore};

use crate::config::Config;
use crate::error::StorageError;
use crate::theme::ThemeApplier;

/// Single-string key/value persistence.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Result of resolving the preference at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceInit {
    /// A preference was already stored; nothing was written or applied.
    AlreadySet(String),
    /// No preference was stored; the default was written and applied.
    DefaultedTo(String),
}

impl PreferenceInit {
    /// The theme the preference now names.
    pub fn theme(&self) -> &str {
        match self {
            Self::AlreadySet(theme) | Self::DefaultedTo(theme) => theme,
        }
    }
}

/// First-run initialization gate for the theme preference.
#[derive(Debug, Clone)]
pub struct PreferenceGate {
    key: String,
    default_theme: String,
}

impl PreferenceGate {
    pub fn new(key: impl Into<String>, default_theme: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            default_theme: default_theme.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.storage.key, &config.themes.default)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Ensure a preference is stored, applying the default on first run.
    ///
    /// An empty stored value counts as absent.
    pub fn resolve<S, A>(
        &self,
        store: &mut S,
        applier: &mut A,
    ) -> Result<PreferenceInit, StorageError>
    where
        S: PreferenceStore + ?Sized,
        A: ThemeApplier + ?Sized,
    {
        if let Some(existing) = store.get(&self.key)?.filter(|value| !value.is_empty()) {
            tracing::debug!(key = %self.key, theme = %existing, "theme preference already set");
            return Ok(PreferenceInit::AlreadySet(existing));
        }

        store.set(&self.key, &self.default_theme)?;
        applier.apply_theme(&self.default_theme);
        let stored = store.get(&self.key)?.unwrap_or_default();
        tracing::info!(key = %self.key, theme = %stored, "stored default theme preference");
        Ok(PreferenceInit::DefaultedTo(self.default_theme.clone()))
    }
}
