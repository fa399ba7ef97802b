//! Seed URL source
//!
//! Seeds come from a line-delimited text file. Blank lines and lines that are
//! not absolute http(s) URLs are dropped before any crawling starts.

use crate::url::parse_absolute_url;
use crate::SitemapError;
use std::path::Path;
use url::Url;

/// Parses seed URLs from line-delimited text
///
/// Each line is trimmed; invalid lines are logged at debug level and
/// skipped. Order is preserved and duplicates are kept, matching the file.
pub fn parse_seed_urls(content: &str) -> Vec<Url> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match parse_absolute_url(line) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::debug!("Dropping seed line '{}': {}", line, e);
                None
            }
        })
        .collect()
}

/// Loads seed URLs from a text file
///
/// # Returns
///
/// * `Ok(Vec<Url>)` - The valid seeds, possibly empty
/// * `Err(SitemapError)` - The file could not be read
pub fn load_seed_urls(path: &Path) -> Result<Vec<Url>, SitemapError> {
    let content = std::fs::read_to_string(path).map_err(|source| SitemapError::SeedFile {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_seed_urls(&content))
}
