//! Crawler module for fetching pages and discovering site URLs
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with identity rotation and fixed-delay retries
//! - HTML parsing and link extraction
//! - The depth-bounded crawl engine
//! - The multi-seed runner that turns each crawl into a sitemap

mod engine;
mod fetcher;
mod identity;
mod parser;
mod retry;

pub use engine::CrawlEngine;
pub use fetcher::{build_http_client, AttemptOutcome, FetchResult, HttpFetcher, PageFetcher};
pub use identity::{IdentityProvider, RandomUserAgents, RotatingIdentities};
pub use parser::{extract_links, HtmlParser, HyperlinkDocument, ScrapedDocument, ScraperParser};
pub use retry::{RetryPolicy, Sleeper, TokioSleeper};

use crate::config::Config;
use crate::output::{build_sitemap, DirectorySink, RunSummary, SeedReport, SitemapSink};
use crate::url::load_seed_urls;
use crate::SitemapError;
use std::path::Path;
use url::Url;

/// Generates one sitemap per seed listed in `seeds_path`
///
/// This is the main entry point. It will:
/// 1. Load and validate the seed URLs
/// 2. Build the HTTP fetcher from the configuration
/// 3. Crawl each seed to `max_depth` levels
/// 4. Write each seed's sitemap into its site directory
///
/// # Returns
///
/// * `Ok(RunSummary)` - All seeds were attempted; per-seed failures are
///   recorded in the summary
/// * `Err(SitemapError)` - The run could not start (unreadable seed file,
///   HTTP client construction failure)
pub async fn run(config: &Config, seeds_path: &Path, max_depth: u32) -> Result<RunSummary, SitemapError> {
    let seeds = load_seed_urls(seeds_path)?;
    tracing::info!(
        "Loaded {} seed URLs from {}",
        seeds.len(),
        seeds_path.display()
    );

    let fetcher = HttpFetcher::from_config(&config.fetcher)?;
    let engine = CrawlEngine::with_fetcher(fetcher);
    let sink = DirectorySink::from_config(&config.output);

    Ok(run_seeds(&engine, &sink, &seeds, max_depth).await)
}

/// Crawls each seed in turn and hands its sitemap to `sink`
///
/// Seeds are isolated from one another: a failure while building or writing
/// one sitemap is logged and recorded, and the next seed still runs.
pub async fn run_seeds<F, P, S>(
    engine: &CrawlEngine<F, P>,
    sink: &S,
    seeds: &[Url],
    max_depth: u32,
) -> RunSummary
where
    F: PageFetcher,
    P: HtmlParser,
    S: SitemapSink,
{
    let mut summary = RunSummary::default();

    for seed in seeds {
        tracing::info!("Starting to crawl {} to generate a sitemap", seed);

        match crawl_seed(engine, sink, seed, max_depth).await {
            Ok(report) => {
                tracing::info!(
                    "Sitemap for {} saved as {} ({} URLs)",
                    seed,
                    report.path.display(),
                    report.urls_found
                );
                summary.record_success(report);
            }
            Err(e) => {
                tracing::error!("Sitemap generation failed for {}: {}", seed, e);
                summary.record_failure(seed.clone(), e.to_string());
            }
        }
    }

    summary
}

/// Crawl, build, and write for a single seed
async fn crawl_seed<F, P, S>(
    engine: &CrawlEngine<F, P>,
    sink: &S,
    seed: &Url,
    max_depth: u32,
) -> Result<SeedReport, SitemapError>
where
    F: PageFetcher,
    P: HtmlParser,
    S: SitemapSink,
{
    let discovered = engine.crawl(seed, max_depth).await;
    tracing::info!(
        "Crawl completed for {}. Found {} URLs",
        seed,
        discovered.len()
    );

    let document = build_sitemap(&discovered)?;
    let path = sink.write_sitemap(seed, &document)?;

    Ok(SeedReport {
        seed: seed.clone(),
        urls_found: discovered.len(),
        path,
    })
}
