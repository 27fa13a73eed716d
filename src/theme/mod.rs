//! Theme discovery and activation.
//!
//! A [`ThemeCatalog`] enumerates stylesheet assets, [`ThemeDiscovery`]
//! attaches each one to a [`Document`] and forwards its canonical name to a
//! [`ThemeRegistrar`].

mod asset;
mod capability;
mod catalog;
mod discovery;
mod document;
mod listing;
mod manifest;

pub use asset::{LinkPolicy, ThemeAsset, ThemeLayout};
pub use capability::{ThemeApplier, ThemeCards, ThemeRegistrar};
pub use catalog::{catalog_from_config, StaticCatalog, ThemeCatalog};
pub use discovery::{DiscoveryPhase, DiscoveryReport, ThemeDiscovery};
pub use document::{Document, HeadFragment, StylesheetLink};
pub use listing::{parse_listing, ListingCatalog};
pub use manifest::{parse_manifest, ManifestCatalog};
