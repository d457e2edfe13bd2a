//! Progress reporter implementations

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Receives progress events from the pagination driver and the downloader
pub trait ProgressReporter: Send + Sync {
    /// A timeline page was fetched and yielded `images` image URLs
    fn page_fetched(&self, images: usize);

    /// Timeline walk complete
    fn fetch_finished(&self, total: usize);

    /// About to download `total` images
    fn download_started(&self, total: usize);

    /// One image written to disk
    fn image_downloaded(&self, url: &str);

    /// All downloads complete
    fn download_finished(&self);
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn page_fetched(&self, _images: usize) {}
    fn fetch_finished(&self, _total: usize) {}
    fn download_started(&self, _total: usize) {}
    fn image_downloaded(&self, _url: &str) {}
    fn download_finished(&self) {}
}

/// Draws a spinner while fetching and a bar while downloading, on stderr
pub struct TerminalReporter {
    fetch: ProgressBar,
    download: Mutex<Option<ProgressBar>>,
}

impl TerminalReporter {
    /// Create a reporter; the fetch spinner starts ticking immediately
    pub fn new() -> Self {
        let fetch = ProgressBar::new_spinner();
        fetch.set_style(style(
            "{spinner:.green} Fetching images: {pos} [{elapsed}]",
            ProgressStyle::default_spinner(),
        ));
        fetch.enable_steady_tick(Duration::from_millis(120));
        Self {
            fetch,
            download: Mutex::new(None),
        }
    }

    /// Image URLs counted so far
    pub fn fetched(&self) -> u64 {
        self.fetch.position()
    }

    /// Images downloaded so far, once downloading has started
    pub fn downloaded(&self) -> Option<u64> {
        self.download
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(ProgressBar::position))
    }

    fn with_download<F: FnOnce(&ProgressBar)>(&self, f: F) {
        if let Ok(guard) = self.download.lock() {
            if let Some(bar) = guard.as_ref() {
                f(bar);
            }
        }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for TerminalReporter {
    fn page_fetched(&self, images: usize) {
        self.fetch.inc(images as u64);
    }

    fn fetch_finished(&self, total: usize) {
        self.fetch
            .finish_with_message(format!("Fetched {total} image URLs"));
    }

    fn download_started(&self, total: usize) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            style(
                "{spinner:.green} Downloading images [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                ProgressStyle::default_bar(),
            )
            .progress_chars("#>-"),
        );
        if let Ok(mut guard) = self.download.lock() {
            *guard = Some(bar);
        }
    }

    fn image_downloaded(&self, _url: &str) {
        self.with_download(|bar| bar.inc(1));
    }

    fn download_finished(&self) {
        self.with_download(|bar| bar.finish_with_message("Download complete"));
    }
}

impl std::fmt::Debug for TerminalReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalReporter")
            .field("fetched", &self.fetch.position())
            .finish_non_exhaustive()
    }
}

/// Apply a template, falling back to the plain style if it does not parse
fn style(template: &str, fallback: ProgressStyle) -> ProgressStyle {
    ProgressStyle::with_template(template).unwrap_or(fallback)
}
