//! Theme discovery: list, activate, and register every theme asset.
//!
//! Assets are processed one at a time in catalog order. Each asset gets one
//! stylesheet link and one registration, so the registration sequence always
//! matches the listing. Identifiers activated by an earlier run are skipped
//! when deduplication is on; repeats inside a single listing are kept.

use std::collections::HashSet;

use super::capability::ThemeRegistrar;
use super::catalog::ThemeCatalog;
use super::document::{Document, StylesheetLink};
use crate::error::CatalogError;

/// Where a discovery run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryPhase {
    Idle,
    /// Waiting on the catalog (fetch and parse).
    Listing,
    /// Activating the asset at this index.
    Activating(usize),
    Done,
    Failed,
}

/// Outcome of one discovery run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryReport {
    /// Identifiers registered by this run, in order.
    pub registered: Vec<String>,
    /// Identifiers skipped because an earlier run already activated them.
    pub duplicates: Vec<String>,
}

/// Drives a [`ThemeCatalog`] into a document and a registrar.
pub struct ThemeDiscovery<C> {
    catalog: C,
    dedupe: bool,
    activated: HashSet<String>,
    phase: DiscoveryPhase,
}

impl<C: ThemeCatalog> ThemeDiscovery<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            dedupe: true,
            activated: HashSet::new(),
            phase: DiscoveryPhase::Idle,
        }
    }

    /// Toggle skipping identifiers activated by earlier runs.
    pub fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }

    pub fn phase(&self) -> DiscoveryPhase {
        self.phase
    }

    /// True once a run has activated `id`.
    pub fn is_activated(&self, id: &str) -> bool {
        self.activated.contains(id)
    }

    /// Run one discovery pass.
    ///
    /// Catalog failures propagate unchanged and leave the document untouched.
    pub async fn run<D, R>(
        &mut self,
        document: &mut D,
        registrar: &mut R,
    ) -> Result<DiscoveryReport, CatalogError>
    where
        D: Document + ?Sized,
        R: ThemeRegistrar + ?Sized,
    {
        self.phase = DiscoveryPhase::Listing;
        let assets = match self.catalog.list_themes().await {
            Ok(assets) => assets,
            Err(err) => {
                self.phase = DiscoveryPhase::Failed;
                tracing::debug!(error = %err, "theme listing failed");
                return Err(err);
            }
        };

        let mut report = DiscoveryReport::default();
        for (index, asset) in assets.iter().enumerate() {
            self.phase = DiscoveryPhase::Activating(index);
            if self.dedupe && self.activated.contains(asset.id()) {
                tracing::debug!(theme = asset.id(), "theme already activated; skipping");
                report.duplicates.push(asset.id().to_string());
                continue;
            }
            document.append_stylesheet(StylesheetLink::stylesheet(asset.address()));
            registrar.register_theme(asset.id());
            report.registered.push(asset.id().to_string());
        }

        // Recorded after the loop so repeats within one listing still register.
        self.activated.extend(report.registered.iter().cloned());
        self.phase = DiscoveryPhase::Done;
        tracing::debug!(
            registered = report.registered.len(),
            duplicates = report.duplicates.len(),
            "theme discovery finished"
        );
        Ok(report)
    }
}
