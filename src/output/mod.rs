//! Output module for sitemap documents and run reporting
//!
//! This module handles:
//! - Serializing a discovered URL set as sitemap XML
//! - Writing sitemaps to per-site directories
//! - Summarizing a multi-seed run

mod sink;
mod sitemap;
pub mod stats;
mod traits;

pub use sink::DirectorySink;
pub use sitemap::{build_sitemap, build_sitemap_dated, SITEMAP_NAMESPACE};
pub use stats::{print_summary, RunSummary, SeedFailure, SeedReport};
pub use traits::{OutputError, OutputResult, SitemapSink};
