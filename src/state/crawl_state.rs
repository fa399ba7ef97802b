use std::collections::HashSet;
use url::Url;

/// Per-crawl bookkeeping for one seed
///
/// Holds the three sets the crawl engine works with:
///
/// - `visited`: every URL a fetch was attempted for; only ever grows
/// - `frontier`: URLs queued for the next depth level
/// - `discovered`: every internal URL found as a link target (the output)
///
/// A fresh `CrawlState` is created per crawl and dropped once its sitemap is
/// written.
#[derive(Debug, Clone)]
pub struct CrawlState {
    seed: Url,
    visited: HashSet<Url>,
    frontier: HashSet<Url>,
    discovered: HashSet<Url>,
    levels_completed: u32,
}

impl CrawlState {
    /// Creates the initial state: the seed alone in the frontier
    pub fn new(seed: Url) -> Self {
        let mut frontier = HashSet::new();
        frontier.insert(seed.clone());

        Self {
            seed,
            visited: HashSet::new(),
            frontier,
            discovered: HashSet::new(),
            levels_completed: 0,
        }
    }

    /// The seed URL that scopes this crawl
    pub fn seed(&self) -> &Url {
        &self.seed
    }

    /// Takes the current frontier as the level set, leaving it empty
    pub fn begin_level(&mut self) -> HashSet<Url> {
        std::mem::take(&mut self.frontier)
    }

    /// Records that a level has been fully processed
    pub fn finish_level(&mut self) {
        self.levels_completed += 1;
    }

    /// Marks a URL as visited
    ///
    /// Returns `false` if it was already visited, in which case the caller
    /// must not fetch it again.
    pub fn mark_visited(&mut self, url: &Url) -> bool {
        self.visited.insert(url.clone())
    }

    /// Records an internal link target
    ///
    /// The URL always joins the discovered set, and joins the next-level
    /// frontier unless it has already been visited.
    pub fn record_link(&mut self, url: Url) {
        if !self.visited.contains(&url) {
            self.frontier.insert(url.clone());
        }
        self.discovered.insert(url);
    }

    pub fn visited(&self) -> &HashSet<Url> {
        &self.visited
    }

    pub fn frontier(&self) -> &HashSet<Url> {
        &self.frontier
    }

    pub fn discovered(&self) -> &HashSet<Url> {
        &self.discovered
    }

    pub fn levels_completed(&self) -> u32 {
        self.levels_completed
    }

    /// Consumes the state, returning the discovered set
    pub fn into_discovered(self) -> HashSet<Url> {
        self.discovered
    }
}
