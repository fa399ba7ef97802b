//! Run summary across all seeds
//!
//! Records what happened to each seed so that one failing site is reported
//! without stopping the rest of the run.

use std::path::PathBuf;
use url::Url;

/// A seed whose sitemap was written
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub seed: Url,

    /// Size of the discovered set
    pub urls_found: usize,

    /// Where the sitemap was written
    pub path: PathBuf,
}

/// A seed whose crawl-and-write sequence failed
#[derive(Debug, Clone)]
pub struct SeedFailure {
    pub seed: Url,
    pub message: String,
}

/// Outcome of a multi-seed run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub reports: Vec<SeedReport>,
    pub failures: Vec<SeedFailure>,
}

impl RunSummary {
    pub fn record_success(&mut self, report: SeedReport) {
        self.reports.push(report);
    }

    pub fn record_failure(&mut self, seed: Url, message: impl Into<String>) {
        self.failures.push(SeedFailure {
            seed,
            message: message.into(),
        });
    }

    pub fn seeds_processed(&self) -> usize {
        self.reports.len() + self.failures.len()
    }

    pub fn total_urls(&self) -> usize {
        self.reports.iter().map(|r| r.urls_found).sum()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Prints a run summary to stdout
pub fn print_summary(summary: &RunSummary) {
    println!("=== Sitemap Generation Summary ===\n");
    println!("Seeds processed: {}", summary.seeds_processed());
    println!("Sitemaps written: {}", summary.reports.len());
    println!("Total URLs: {}", summary.total_urls());

    if !summary.reports.is_empty() {
        println!("\nSitemaps:");
        for report in &summary.reports {
            println!(
                "  - {} ({} URLs) -> {}",
                report.seed,
                report.urls_found,
                report.path.display()
            );
        }
    }

    if summary.has_failures() {
        println!("\nFailures ({}):", summary.failures.len());
        for failure in &summary.failures {
            println!("  - {}: {}", failure.seed, failure.message);
        }
    }
}
