//! Directory-listing catalog.
//!
//! Fetches a web-server auto-index page and extracts anchors whose target
//! ends with the stylesheet extension, in document order.

use async_trait::async_trait;
use scraper::{Html, Selector};

use super::asset::{collect_assets, LinkPolicy, ThemeAsset, ThemeLayout};
use super::catalog::{fetch_text, ThemeCatalog};
use crate::error::CatalogError;

/// Catalog backed by an HTML directory listing.
#[derive(Debug, Clone)]
pub struct ListingCatalog {
    http: reqwest::Client,
    url: String,
    layout: ThemeLayout,
    policy: LinkPolicy,
}

impl ListingCatalog {
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
impl ThemeCatalog for ListingCatalog {
    async fn list_themes(&self) -> Result<Vec<ThemeAsset>, CatalogError> {
        tracing::debug!(url = %self.url, "fetching theme listing");
        let html = fetch_text(&self.http, &self.url).await?;
        let hrefs = parse_listing(&html, &self.layout);
        tracing::debug!(count = hrefs.len(), "parsed stylesheet links from listing");
        collect_assets(&self.layout, hrefs.into_iter().map(Some), self.policy)
    }
}

/// Stylesheet hrefs found in a listing, in document order.
///
/// Text that is not a well-formed document still parses (leniently); a
/// listing without matching anchors yields an empty list.
pub fn parse_listing(html: &str, layout: &ThemeLayout) -> Vec<String> {
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse("a[href]").expect("valid anchor selector");
    document
        .select(&anchor_selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| layout.matches(href))
        .map(str::to_string)
        .collect()
}
