//! Crawl engine - depth-bounded, same-site URL discovery
//!
//! The engine works level by level: every URL in the frontier is fetched
//! once, its links are extracted, and internal links seed the next level.
//! All state lives in a [`CrawlState`] created per crawl.

use crate::crawler::fetcher::PageFetcher;
use crate::crawler::parser::{extract_links, HtmlParser, ScraperParser};
use crate::state::CrawlState;
use crate::url::is_internal;
use std::collections::HashSet;
use url::Url;

/// Orchestrates fetching, link extraction and domain filtering
pub struct CrawlEngine<F, P = ScraperParser> {
    fetcher: F,
    parser: P,
}

impl<F: PageFetcher> CrawlEngine<F, ScraperParser> {
    /// Creates an engine that parses pages with [`ScraperParser`]
    pub fn with_fetcher(fetcher: F) -> Self {
        Self::new(fetcher, ScraperParser)
    }
}

impl<F: PageFetcher, P: HtmlParser> CrawlEngine<F, P> {
    pub fn new(fetcher: F, parser: P) -> Self {
        Self { fetcher, parser }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Crawls from `seed` and returns every internal URL discovered
    ///
    /// The seed itself only appears in the result if some crawled page links
    /// back to it. `max_depth = 0` performs no fetches.
    pub async fn crawl(&self, seed: &Url, max_depth: u32) -> HashSet<Url> {
        self.crawl_state(seed, max_depth).await.into_discovered()
    }

    /// Crawls from `seed`, returning the full final state
    pub async fn crawl_state(&self, seed: &Url, max_depth: u32) -> CrawlState {
        let mut state = CrawlState::new(seed.clone());

        for depth in 1..=max_depth {
            let level = state.begin_level();
            if level.is_empty() {
                tracing::debug!(
                    "Frontier empty after {} levels for {}, stopping early",
                    depth - 1,
                    seed
                );
                break;
            }

            tracing::info!("Depth {}: Found {} URLs to crawl", depth, level.len());

            for url in level {
                self.visit(&mut state, url).await;
            }

            state.finish_level();
        }

        state
    }

    /// Fetches one URL and records its internal links
    async fn visit(&self, state: &mut CrawlState, url: Url) {
        if !state.mark_visited(&url) {
            return;
        }

        let Some(body) = self.fetcher.fetch(&url).await else {
            tracing::debug!("No content for {}, not expanding", url);
            return;
        };

        let links = extract_links(&self.parser, &body, &url);
        let mut internal = 0usize;
        for link in links {
            if is_internal(state.seed(), &link) {
                state.record_link(link);
                internal += 1;
            }
        }

        tracing::debug!("{} internal links found on {}", internal, url);
    }
}
