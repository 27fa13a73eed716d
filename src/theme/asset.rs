//! Theme asset references and identifier derivation.

use serde::Deserialize;

use crate::error::CatalogError;

/// How a catalog treats a listed link it cannot turn into a theme.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LinkPolicy {
    /// Drop the link without a diagnostic.
    Skip,
    /// Drop the link and emit a warning.
    #[default]
    Warn,
    /// Fail the whole listing.
    Fail,
}

/// Folder prefix and file extension shared by every theme asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeLayout {
    folder: String,
    extension: String,
}

impl ThemeLayout {
    pub fn new(folder: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            extension: extension.into(),
        }
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// True when `href` names a stylesheet (case-sensitive suffix match).
    pub fn matches(&self, href: &str) -> bool {
        href.ends_with(&self.extension)
    }

    /// Full resource address for a listed href.
    pub fn address_for(&self, href: &str) -> String {
        format!("{}{}", self.folder, href)
    }

    /// Canonical theme identifier for an address.
    ///
    /// The folder prefix and extension suffix are each stripped at most once,
    /// and only at the string boundaries.
    pub fn theme_id(&self, address: &str) -> String {
        let trimmed = address.trim();
        let without_folder = trimmed.strip_prefix(&self.folder).unwrap_or(trimmed);
        without_folder
            .strip_suffix(&self.extension)
            .unwrap_or(without_folder)
            .to_string()
    }
}

impl Default for ThemeLayout {
    fn default() -> Self {
        Self::new("./themes/", ".css")
    }
}

/// One discovered stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeAsset {
    href: String,
    address: String,
    id: String,
}

impl ThemeAsset {
    /// Build an asset from a listed href, or `None` when no usable
    /// identifier can be derived from it.
    pub fn from_href(layout: &ThemeLayout, href: &str) -> Option<Self> {
        if href.trim().is_empty() {
            return None;
        }
        let address = layout.address_for(href);
        let id = layout.theme_id(&address);
        if id.is_empty() {
            return None;
        }
        Some(Self {
            href: href.to_string(),
            address,
            id,
        })
    }

    /// Raw reference as it appeared in the catalog.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Folder-qualified address used for the stylesheet link.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Canonical theme identifier.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Turn raw catalog links into assets in order, applying `policy` to links
/// that are missing an href or yield an empty identifier.
pub(crate) fn collect_assets<I>(
    layout: &ThemeLayout,
    links: I,
    policy: LinkPolicy,
) -> Result<Vec<ThemeAsset>, CatalogError>
where
    I: IntoIterator<Item = Option<String>>,
{
    let mut assets = Vec::new();
    for (position, link) in links.into_iter().enumerate() {
        let asset = link
            .as_deref()
            .and_then(|href| ThemeAsset::from_href(layout, href));
        if let Some(asset) = asset {
            assets.push(asset);
            continue;
        }

        let described = match &link {
            Some(href) => format!("link #{position} `{href}` has no theme name"),
            None => format!("link #{position} has no href"),
        };
        match policy {
            LinkPolicy::Skip => {}
            LinkPolicy::Warn => tracing::warn!("skipping theme {described}"),
            LinkPolicy::Fail => return Err(CatalogError::MalformedLink(described)),
        }
    }
    Ok(assets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_identifier_from_folder_and_extension() {
        let layout = ThemeLayout::default();
        let asset = ThemeAsset::from_href(&layout, "arctic.css").expect("asset");
        assert_eq!(asset.href(), "arctic.css");
        assert_eq!(asset.address(), "./themes/arctic.css");
        assert_eq!(asset.id(), "arctic");
    }

    #[test]
    fn strips_only_at_boundaries_and_only_once() {
        let layout = ThemeLayout::default();
        assert_eq!(layout.theme_id("./themes/a.css.css"), "a.css");
        assert_eq!(layout.theme_id("./themes/./themes/x.css"), "./themes/x");
        assert_eq!(layout.theme_id("x.css/y"), "x.css/y");
        assert_eq!(layout.theme_id("  ./themes/dusk.css \n"), "dusk");
    }

    #[test]
    fn custom_layout_is_respected() {
        let layout = ThemeLayout::new("/static/skins/", ".skin.css");
        assert!(layout.matches("neon.skin.css"));
        assert!(!layout.matches("neon.CSS"));
        let asset = ThemeAsset::from_href(&layout, "neon.skin.css").expect("asset");
        assert_eq!(asset.address(), "/static/skins/neon.skin.css");
        assert_eq!(asset.id(), "neon");
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        let layout = ThemeLayout::default();
        assert!(layout.matches("arctic.css"));
        assert!(!layout.matches("arctic.CSS"));
        assert!(!layout.matches("readme.txt"));
    }

    #[test]
    fn blank_or_nameless_hrefs_are_not_assets() {
        let layout = ThemeLayout::default();
        assert!(ThemeAsset::from_href(&layout, "").is_none());
        assert!(ThemeAsset::from_href(&layout, "   ").is_none());
        assert!(ThemeAsset::from_href(&layout, ".css").is_none());
    }

    #[test]
    fn collect_assets_keeps_order_and_duplicates() {
        let links = ["b.css", "a.css", "b.css"].map(|s| Some(s.to_string()));
        let assets =
            collect_assets(&ThemeLayout::default(), links, LinkPolicy::Fail).expect("assets");
        let ids: Vec<_> = assets.iter().map(ThemeAsset::id).collect();
        assert_eq!(ids, vec!["b", "a", "b"]);
    }

    #[test]
    fn collect_assets_skips_malformed_links_unless_failing() {
        let links = || vec![Some("arctic.css".to_string()), None, Some(".css".to_string())];

        for policy in [LinkPolicy::Skip, LinkPolicy::Warn] {
            let assets = collect_assets(&ThemeLayout::default(), links(), policy).expect("assets");
            assert_eq!(assets.len(), 1);
            assert_eq!(assets[0].id(), "arctic");
        }

        let err = collect_assets(&ThemeLayout::default(), links(), LinkPolicy::Fail)
            .expect_err("must fail");
        assert_eq!(err.to_string(), "malformed theme link: link #1 has no href");
    }
}
