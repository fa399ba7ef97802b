//! URL handling module for sitemap-gen
//!
//! This module provides URL validation, the same-site domain filter, and the
//! seed URL source.

mod domain;
mod seeds;

use crate::{UrlError, UrlResult};
use url::Url;

// Re-export main functions
pub use domain::{is_internal, netloc};
pub use seeds::{load_seed_urls, parse_seed_urls};

/// Parses a string into an absolute, crawlable URL
///
/// A crawlable URL has an `http` or `https` scheme and a non-empty host.
///
/// # Examples
///
/// ```
/// use sitemap_gen::url::parse_absolute_url;
///
/// assert!(parse_absolute_url("https://example.com/").is_ok());
/// assert!(parse_absolute_url("example.com").is_err());
/// assert!(parse_absolute_url("mailto:a@example.com").is_err());
/// ```
pub fn parse_absolute_url(input: &str) -> UrlResult<Url> {
    let url = Url::parse(input).map_err(|e| UrlError::Parse(format!("{}: {}", input, e)))?;
    validate_url(url)
}

/// Checks that an already-parsed URL is crawlable
pub fn validate_url(url: Url) -> UrlResult<Url> {
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if netloc(&url).is_none() {
        return Err(UrlError::MissingHost(url.to_string()));
    }

    Ok(url)
}
