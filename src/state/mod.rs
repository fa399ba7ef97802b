//! State module for tracking crawl progress
//!
//! `CrawlState` owns the visited set, the frontier, and the discovered set
//! for a single seed's crawl. Nothing here outlives one crawl.

mod crawl_state;

pub use crawl_state::CrawlState;
