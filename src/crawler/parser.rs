//! HTML parsing and link extraction
//!
//! Parsing sits behind [`HtmlParser`] so the crawl engine only sees a
//! document that can enumerate its hyperlink targets. [`ScraperParser`] is
//! the `scraper`-based implementation.

use crate::url::validate_url;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// A parsed page that can list the raw targets of its hyperlinks
pub trait HyperlinkDocument {
    /// Raw `href` values of every hyperlink element, in document order
    fn hyperlink_targets(&self) -> Vec<String>;
}

/// Turns a response body into a [`HyperlinkDocument`]
pub trait HtmlParser {
    type Document: HyperlinkDocument;

    fn parse(&self, body: &str) -> Self::Document;
}

/// HTML parser built on `scraper` (html5ever)
#[derive(Debug, Clone, Copy, Default)]
pub struct ScraperParser;

/// A document parsed by [`ScraperParser`]
pub struct ScrapedDocument {
    html: Html,
}

impl HtmlParser for ScraperParser {
    type Document = ScrapedDocument;

    fn parse(&self, body: &str) -> ScrapedDocument {
        ScrapedDocument {
            html: Html::parse_document(body),
        }
    }
}

impl HyperlinkDocument for ScrapedDocument {
    fn hyperlink_targets(&self) -> Vec<String> {
        let mut targets = Vec::new();

        if let Ok(a_selector) = Selector::parse("a[href]") {
            for element in self.html.select(&a_selector) {
                if let Some(href) = element.value().attr("href") {
                    targets.push(href.to_string());
                }
            }
        }

        targets
    }
}

/// Extracts the set of absolute URLs a page links to
///
/// Each target is resolved against `page_url`, so relative paths,
/// protocol-relative links and fragments all become absolute. Targets that
/// fail to resolve, or resolve to something other than an http(s) URL with a
/// host, are skipped.
///
/// # Example
///
/// ```
/// use sitemap_gen::crawler::{extract_links, ScraperParser};
/// use url::Url;
///
/// let html = r#"<html><body><a href="/page">Link</a></body></html>"#;
/// let page_url = Url::parse("https://example.com/").unwrap();
/// let links = extract_links(&ScraperParser, html, &page_url);
/// assert!(links.contains(&Url::parse("https://example.com/page").unwrap()));
/// ```
pub fn extract_links<P: HtmlParser>(parser: &P, body: &str, page_url: &Url) -> HashSet<Url> {
    parser
        .parse(body)
        .hyperlink_targets()
        .iter()
        .filter_map(|href| resolve_link(href, page_url))
        .collect()
}

/// Resolves one `href` against the page URL
fn resolve_link(href: &str, page_url: &Url) -> Option<Url> {
    let resolved = match page_url.join(href.trim()) {
        Ok(url) => url,
        Err(e) => {
            tracing::trace!("Skipping unresolvable link '{}' on {}: {}", href, page_url, e);
            return None;
        }
    };

    validate_url(resolved).ok()
}
