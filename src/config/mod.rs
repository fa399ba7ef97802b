//! Configuration module for sitemap-gen
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a default, so running without a file is
//! the same as running with an empty one.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_gen::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sitemap-gen.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, FetcherConfig, OutputConfig, DEFAULT_USER_AGENTS};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
