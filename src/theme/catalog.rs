//! Theme catalogs: sources that enumerate theme assets.
//!
//! Discovery only depends on [`ThemeCatalog`]; scraping a directory listing
//! is one implementation among several.

use async_trait::async_trait;
use std::time::Duration;

use super::asset::{collect_assets, LinkPolicy, ThemeAsset, ThemeLayout};
use super::listing::ListingCatalog;
use super::manifest::ManifestCatalog;
use crate::config::{CatalogKind, Config};
use crate::error::CatalogError;

/// Enumerates available theme assets.
#[async_trait]
pub trait ThemeCatalog: Send + Sync {
    /// List assets in a stable order.
    async fn list_themes(&self) -> Result<Vec<ThemeAsset>, CatalogError>;
}

#[async_trait]
impl<T> ThemeCatalog for Box<T>
where
    T: ThemeCatalog + ?Sized,
{
    async fn list_themes(&self) -> Result<Vec<ThemeAsset>, CatalogError> {
        (**self).list_themes().await
    }
}

/// Catalog over a fixed list of hrefs.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    layout: ThemeLayout,
    hrefs: Vec<String>,
    policy: LinkPolicy,
}

impl StaticCatalog {
    pub fn new(layout: ThemeLayout, hrefs: Vec<String>) -> Self {
        Self {
            layout,
            hrefs,
            policy: LinkPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: LinkPolicy) -> Self {
        self.policy = policy;
        self
    }
}

#[async_trait]
impl ThemeCatalog for StaticCatalog {
    async fn list_themes(&self) -> Result<Vec<ThemeAsset>, CatalogError> {
        collect_assets(
            &self.layout,
            self.hrefs.iter().cloned().map(Some),
            self.policy,
        )
    }
}

/// Build the catalog selected by `[catalog].kind`.
pub fn catalog_from_config(config: &Config) -> Box<dyn ThemeCatalog> {
    let layout = ThemeLayout::new(&config.themes.folder, &config.themes.extension);
    let policy = config.discovery.on_malformed;
    let http = build_http_client(config.network.fetch_timeout_secs.map(Duration::from_secs));
    match config.catalog.kind {
        CatalogKind::Listing => Box::new(
            ListingCatalog::new(http, &config.catalog.url, layout).with_policy(policy),
        ),
        CatalogKind::Manifest => Box::new(
            ManifestCatalog::new(http, &config.catalog.url, layout).with_policy(policy),
        ),
        CatalogKind::Static => Box::new(
            StaticCatalog::new(layout, config.catalog.entries.clone()).with_policy(policy),
        ),
    }
}

/// Build an HTTP client, with a request timeout only when one is configured.
pub(crate) fn build_http_client(timeout: Option<Duration>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder().user_agent(concat!(
        "theme-loader/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    // Fall back to reqwest defaults if builder creation fails for any reason.
    builder.build().unwrap_or_else(|err| {
        if let Some(timeout) = timeout {
            tracing::warn!(
                error = %err,
                timeout_secs = timeout.as_secs(),
                "http client setup failed; fetching without the configured timeout"
            );
        }
        reqwest::Client::new()
    })
}

/// GET `url` and return the body, treating non-2xx as an error.
pub(crate) async fn fetch_text(http: &reqwest::Client, url: &str) -> Result<String, CatalogError> {
    let response = http.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CatalogError::Status(status.as_u16(), body));
    }
    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_catalog_lists_entries_in_order() {
        let catalog = StaticCatalog::new(
            ThemeLayout::default(),
            vec!["midnight.css".into(), "arctic.css".into()],
        );
        let ids: Vec<_> = catalog
            .list_themes()
            .await
            .expect("list")
            .iter()
            .map(|a| a.id().to_string())
            .collect();
        assert_eq!(ids, vec!["midnight", "arctic"]);
    }

    #[tokio::test]
    async fn static_catalog_applies_link_policy() {
        let catalog = StaticCatalog::new(ThemeLayout::default(), vec![" ".into()])
            .with_policy(LinkPolicy::Fail);
        let err = catalog.list_themes().await.expect_err("blank href");
        assert!(matches!(err, CatalogError::MalformedLink(_)), "got: {err}");
    }

    #[tokio::test]
    async fn http_client_with_timeout_fetches() {
        let server = crate::testsupport::serve_once(crate::testsupport::HttpFixture::ok(
            "text/plain",
            "body",
        ))
        .await;
        let http = build_http_client(Some(Duration::from_secs(5)));
        let text = fetch_text(&http, &server.url("/x")).await.expect("fetch");
        assert_eq!(text, "body");
    }

    #[tokio::test]
    async fn config_selects_static_catalog() {
        let mut config = Config::default();
        config.catalog.kind = CatalogKind::Static;
        config.catalog.entries = vec!["dusk.css".into()];
        let catalog = catalog_from_config(&config);
        let assets = catalog.list_themes().await.expect("list");
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].address(), "./themes/dusk.css");
    }
}
