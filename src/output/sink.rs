use crate::config::OutputConfig;
use crate::output::traits::{OutputError, OutputResult, SitemapSink};
use crate::url::netloc;
use std::fs;
use std::path::PathBuf;
use url::Url;

/// Writes each site's sitemap to `<root>/<netloc>/<file_name>`
///
/// The per-site directory is created on demand and an existing sitemap is
/// overwritten in full.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
    file_name: String,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            file_name: file_name.into(),
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(&config.directory, &config.file_name)
    }

    /// Where the sitemap for `seed` lives
    pub fn sitemap_path(&self, seed: &Url) -> OutputResult<PathBuf> {
        let site = netloc(seed).ok_or_else(|| {
            OutputError::Write(format!("seed {} has no network location", seed))
        })?;
        Ok(self.root.join(site).join(&self.file_name))
    }
}

impl SitemapSink for DirectorySink {
    fn write_sitemap(&self, seed: &Url, document: &str) -> OutputResult<PathBuf> {
        let path = self.sitemap_path(seed)?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, document)?;

        tracing::debug!("Wrote {} bytes to {}", document.len(), path.display());
        Ok(path)
    }
}
