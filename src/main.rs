//! sitemap-gen main entry point
//!
//! This is the command-line interface for the sitemap generator.

use anyhow::Context;
use clap::Parser;
use sitemap_gen::config::{load_config_with_hash, Config};
use sitemap_gen::crawler::run;
use sitemap_gen::output::print_summary;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// sitemap-gen: crawl sites and write their sitemaps
///
/// Reads one seed URL per line from URLS_FILE, crawls each site's internal
/// links up to the given depth, and writes `<domain>/sitemap.xml` for every
/// seed.
#[derive(Parser, Debug)]
#[command(name = "sitemap-gen")]
#[command(version)]
#[command(about = "Crawl websites and generate sitemaps", long_about = None)]
struct Cli {
    /// Text file with one seed URL per line
    #[arg(value_name = "URLS_FILE")]
    seeds: PathBuf,

    /// Number of link levels to follow from each seed [default: 3]
    #[arg(short = 'd', long, value_name = "N")]
    max_depth: Option<u32>,

    /// Optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    let max_depth = cli.max_depth.unwrap_or(config.crawler.max_depth);
    tracing::info!(
        "Loading URLs from {} (max depth {})",
        cli.seeds.display(),
        max_depth
    );

    let summary = run(&config, &cli.seeds, max_depth)
        .await
        .context("Sitemap generation failed")?;

    if summary.has_failures() {
        tracing::warn!(
            "{} of {} seeds failed",
            summary.failures.len(),
            summary.seeds_processed()
        );
    }

    if !cli.quiet {
        print_summary(&summary);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitemap_gen=info,warn"),
            1 => EnvFilter::new("sitemap_gen=debug,info"),
            2 => EnvFilter::new("sitemap_gen=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
