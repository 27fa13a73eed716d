//! theme-loader: discover CSS themes and apply a persisted preference.
//!
//! On startup a [`preference::PreferenceGate`] makes sure a theme preference
//! exists, applying the configured default the first time. A
//! [`theme::ThemeDiscovery`] then lists every stylesheet from a
//! [`theme::ThemeCatalog`] (an auto-index directory listing by default),
//! attaches each one to the document head, and registers its canonical name
//! with the theme picker.
//!
//! # Quick start
//!
//! ```no_run
//! use theme_loader::config::load_config;
//! use theme_loader::preference::{MemoryStore, PreferenceGate};
//! use theme_loader::startup::{run_startup, StartupContext};
//! use theme_loader::theme::{catalog_from_config, HeadFragment, ThemeCards, ThemeDiscovery};
//!
//! # async fn example() {
//! let config = load_config(None).unwrap();
//! let gate = PreferenceGate::from_config(&config);
//! let mut discovery = ThemeDiscovery::new(catalog_from_config(&config));
//! let mut store = MemoryStore::new();
//! let mut head = HeadFragment::new();
//! let mut cards = ThemeCards::new();
//! let report = run_startup(
//!     &gate,
//!     &mut discovery,
//!     StartupContext {
//!         store: &mut store,
//!         applier: &mut |theme: &str| println!("apply {theme}"),
//!         document: &mut head,
//!         registrar: &mut cards,
//!     },
//! )
//! .await
//! .unwrap();
//! println!("{:?}", report.discovery.registered);
//! # }
//! ```

pub mod config;
pub mod error;
pub mod preference;
pub mod startup;
#[cfg(test)]
pub mod testsupport;
pub mod theme;
