//! Output sink trait and error types

use std::path::PathBuf;
use thiserror::Error;
use url::Url;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("Failed to format output: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Destination for finished sitemap documents
///
/// Called once per seed with the complete document. Implementations replace
/// any previous sitemap for the same site rather than merging.
pub trait SitemapSink {
    /// Stores `document` for `seed`, returning where it was written
    fn write_sitemap(&self, seed: &Url, document: &str) -> OutputResult<PathBuf>;
}
