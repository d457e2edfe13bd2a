//! CLI runner - executes a harvest run

use crate::auth::{cookies_to_mapping, BrowserCookieSource, CookieSource, Credentials};
use crate::cli::commands::Cli;
use crate::config::{HarvestConfig, COOKIE_DOMAIN};
use crate::download::Downloader;
use crate::error::{Error, Result};
use crate::output::save_urls;
use crate::pagination::{LikesPageSource, PaginationDriver};
use crate::progress::{ProgressReporter, TerminalReporter};
use crate::types::ImageUrls;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Every image URL collected, in timeline order
    pub images: ImageUrls,
    /// Where the URL list was written
    pub output_file: PathBuf,
    /// Number of images downloaded (0 without `--download`)
    pub downloaded: usize,
}

/// CLI runner
pub struct Runner {
    config: HarvestConfig,
    cookie_source: Arc<dyn CookieSource>,
    reporter: Box<dyn ProgressReporter>,
}

impl Runner {
    /// Create a runner reading browser cookies and drawing progress on the terminal
    pub fn new(config: HarvestConfig) -> Self {
        let domain = COOKIE_DOMAIN.trim_start_matches('.');
        Self {
            config,
            cookie_source: Arc::new(BrowserCookieSource::new().with_domain(domain)),
            reporter: Box::new(TerminalReporter::new()),
        }
    }

    /// Create a runner from parsed arguments
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cli.to_config(&cwd)))
    }

    /// Read cookies from `source` instead of the browsers
    #[must_use]
    pub fn with_cookie_source(mut self, source: impl CookieSource + 'static) -> Self {
        self.cookie_source = Arc::new(source);
        self
    }

    /// Report progress to `reporter`
    #[must_use]
    pub fn with_reporter(mut self, reporter: impl ProgressReporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Get the run configuration
    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// Resolve the session credentials for this run
    pub async fn credentials(&self) -> Result<Credentials> {
        if let Some(raw) = &self.config.cookies {
            return Ok(Credentials::RawCookieHeader(raw.clone()));
        }

        // Browser stores are read from disk (and may prompt a keyring), off the runtime
        let source = Arc::clone(&self.cookie_source);
        let cookies = tokio::task::spawn_blocking(move || source.load())
            .await
            .map_err(|e| Error::cookie_store(e.to_string()))??;

        let mapping = cookies_to_mapping(cookies, COOKIE_DOMAIN);
        if mapping.is_empty() {
            warn!("No browser cookies found for {COOKIE_DOMAIN}; requests will be anonymous");
        } else {
            info!("Using {} browser cookies for {COOKIE_DOMAIN}", mapping.len());
        }
        Ok(Credentials::CookieJar(mapping))
    }

    /// Run the harvest: collect, save, then optionally download
    pub async fn run(&self) -> Result<RunSummary> {
        let credentials = self.credentials().await?;
        let reporter = self.reporter.as_ref();

        // The timeline session is dropped before downloading starts
        let images = {
            let source = LikesPageSource::from_config(&self.config, &credentials)?;
            PaginationDriver::new(source)
                .collect_image_urls(reporter)
                .await?
        };

        let output_file = save_urls(&images, &self.config.output_dir)?;

        let downloaded = if self.config.download {
            Downloader::new(self.config.output_dir.as_path())?
                .download_all(&images, reporter)
                .await?
                .len()
        } else {
            0
        };

        info!("Report success");
        Ok(RunSummary {
            images,
            output_file,
            downloaded,
        })
    }
}

impl std::fmt::Debug for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runner")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
