//! Document mutation surface for activated stylesheets.

/// A stylesheet link attached to the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetLink {
    pub rel: &'static str,
    pub content_type: &'static str,
    pub href: String,
}

impl StylesheetLink {
    /// `rel="stylesheet" type="text/css"` link for `href`.
    pub fn stylesheet(href: impl Into<String>) -> Self {
        Self {
            rel: "stylesheet",
            content_type: "text/css",
            href: href.into(),
        }
    }

    /// Render as an HTML `<link>` element.
    pub fn to_html(&self) -> String {
        format!(
            "<link rel=\"{}\" type=\"{}\" href=\"{}\">",
            self.rel,
            self.content_type,
            escape_attribute(&self.href)
        )
    }
}

/// Anything that can receive stylesheet links in its head.
pub trait Document {
    /// Append one link. Links are never removed.
    fn append_stylesheet(&mut self, link: StylesheetLink);
}

/// In-memory document head that keeps links in append order.
#[derive(Debug, Clone, Default)]
pub struct HeadFragment {
    links: Vec<StylesheetLink>,
}

impl HeadFragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn links(&self) -> &[StylesheetLink] {
        &self.links
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// One `<link>` element per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for link in &self.links {
            out.push_str(&link.to_html());
            out.push('\n');
        }
        out
    }

    /// Insert the rendered links right before the page's `</head>` tag.
    ///
    /// Pages without a head get the links prepended.
    pub fn splice_into(&self, page: &str) -> String {
        let rendered = self.render();
        match find_ascii_case_insensitive(page, "</head>") {
            Some(idx) => {
                let mut out = String::with_capacity(page.len() + rendered.len());
                out.push_str(&page[..idx]);
                out.push_str(&rendered);
                out.push_str(&page[idx..]);
                out
            }
            None => format!("{rendered}{page}"),
        }
    }
}

impl Document for HeadFragment {
    fn append_stylesheet(&mut self, link: StylesheetLink) {
        self.links.push(link);
    }
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn find_ascii_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}
