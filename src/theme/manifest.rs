//! JSON manifest catalog.
//!
//! Accepts `{"themes": ["arctic.css", {"href": "midnight.css"}]}`. Object
//! entries without an `href` are malformed links.

use async_trait::async_trait;
use serde::Deserialize;

use super::asset::{collect_assets, LinkPolicy, ThemeAsset, ThemeLayout};
use super::catalog::{fetch_text, ThemeCatalog};
use crate::error::CatalogError;

#[derive(Debug, Deserialize)]
struct ThemeManifest {
    #[serde(default)]
    themes: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ManifestEntry {
    Href(String),
    Entry {
        #[serde(default)]
        href: Option<String>,
    },
}

impl ManifestEntry {
    fn into_href(self) -> Option<String> {
        match self {
            Self::Href(href) => Some(href),
            Self::Entry { href } => href,
        }
    }
}

/// Catalog backed by a JSON manifest served over HTTP.
#[derive(Debug, Clone)]
pub struct ManifestCatalog {
    http: reqwest::Client,
    url: String,
    layout: ThemeLayout,
    policy: LinkPolicy,
}

impl ManifestCatalog {
    pub fn new(http: reqwest::Client, url: impl Into<String>, layout: ThemeLayout) -> Self {
        Self {
            http,
            url: url.into(),
            layout,
            policy: LinkPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: LinkPolicy) -> Self {
        self.policy = policy;
        self
    }
}

#[async_trait]
impl ThemeCatalog for ManifestCatalog {
    async fn list_themes(&self) -> Result<Vec<ThemeAsset>, CatalogError> {
        tracing::debug!(url = %self.url, "fetching theme manifest");
        let body = fetch_text(&self.http, &self.url).await?;
        let hrefs = parse_manifest(&body)?;
        collect_assets(&self.layout, hrefs, self.policy)
    }
}

/// Hrefs listed by a manifest body, `None` for entries without one.
pub fn parse_manifest(body: &str) -> Result<Vec<Option<String>>, CatalogError> {
    let manifest: ThemeManifest =
        serde_json::from_str(body).map_err(|e| CatalogError::Manifest(e.to_string()))?;
    Ok(manifest
        .themes
        .into_iter()
        .map(ManifestEntry::into_href)
        .collect())
}
