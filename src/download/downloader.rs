//! Sequential image downloader

use crate::error::{Error, Result, ResultExt};
use crate::http::HttpClient;
use crate::progress::ProgressReporter;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;

/// File name an image is saved under: the last non-empty path segment of its URL
pub fn file_name_for(image_url: &str) -> Result<String> {
    let url = Url::parse(image_url)?;
    url.path_segments()
        .and_then(|segments| segments.rev().find(|s| !s.is_empty()))
        .map(str::to_string)
        .ok_or_else(|| Error::download(image_url, "URL has no file name"))
}

/// Downloads images into a directory over its own HTTP session
#[derive(Debug)]
pub struct Downloader {
    client: HttpClient,
    dir: PathBuf,
}

impl Downloader {
    /// Create a downloader with a fresh, unauthenticated session
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::with_client(HttpClient::new()?, dir))
    }

    /// Create a downloader over an existing client
    pub fn with_client(client: HttpClient, dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            dir: dir.into(),
        }
    }

    /// Target directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Download one image, returning the path written
    pub async fn download_one(&self, image_url: &str) -> Result<PathBuf> {
        let path = self.dir.join(file_name_for(image_url)?);
        let bytes = self.client.get_bytes(image_url).await?;
        tokio::fs::write(&path, &bytes)
            .await
            .with_context(|| format!("Failed to save {}", path.display()))?;
        debug!("Saved {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }

    /// Download every image in order, stopping at the first failure
    pub async fn download_all(
        &self,
        urls: &[String],
        reporter: &dyn ProgressReporter,
    ) -> Result<Vec<PathBuf>> {
        reporter.download_started(urls.len());
        let mut written = Vec::with_capacity(urls.len());

        for url in urls {
            written.push(self.download_one(url).await?);
            reporter.image_downloaded(url);
        }

        reporter.download_finished();
        info!("Downloaded {} images to {}", written.len(), self.dir.display());
        Ok(written)
    }
}
