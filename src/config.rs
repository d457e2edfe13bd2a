//! Run configuration
//!
//! Everything a harvest run needs, gathered once at startup and never
//! mutated afterwards.

use std::path::PathBuf;

// ============================================================================
// Remote API Constants
// ============================================================================

/// GraphQL endpoint serving the Likes timeline
pub const LIKES_ENDPOINT: &str = "https://x.com/i/api/graphql/U1iuEM9U-e3QXOIkqOFAyw/Likes";

/// Public bearer token of the web client, independent of the logged-in user
pub const WEB_BEARER_TOKEN: &str = "AAAAAAAAAAAAAAAAAAAAANRILgAAAAAAnNwIzUejRCOuH5E6I8xnZz4puTs%3D1Zv7ttfk8LF81IUq16cHjhLTvJu4FA33AGWWjCpTnA";

/// Apex domain browser cookies are scoped to
pub const COOKIE_DOMAIN: &str = ".x.com";

/// Default account whose likes are walked
pub const DEFAULT_USER_ID: &str = "1646623670968754176";

/// Default number of entries requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Name of the file the collected URLs are written to
pub const OUTPUT_FILE_NAME: &str = "data.json";

/// JSON key holding an image URL inside a tweet's media entry
pub const MEDIA_URL_KEY: &str = "media_url_https";

// ============================================================================
// Harvest Config
// ============================================================================

/// Configuration for a single harvest run
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// GraphQL endpoint to page through
    pub endpoint: String,
    /// Bearer token sent in the `authorization` header
    pub bearer_token: String,
    /// Value of the `x-csrf-token` header
    pub csrf_token: String,
    /// Raw `Cookie` header; browser cookies are read when absent
    pub cookies: Option<String>,
    /// Account whose likes are collected
    pub user_id: String,
    /// Entries requested per page
    pub page_size: u32,
    /// Directory for `data.json` and downloaded images
    pub output_dir: PathBuf,
    /// Download the images after saving the URL list
    pub download: bool,
}

impl HarvestConfig {
    /// Create a config with defaults for everything but the CSRF token
    pub fn new(csrf_token: impl Into<String>) -> Self {
        Self {
            endpoint: LIKES_ENDPOINT.to_string(),
            bearer_token: WEB_BEARER_TOKEN.to_string(),
            csrf_token: csrf_token.into(),
            cookies: None,
            user_id: DEFAULT_USER_ID.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            output_dir: PathBuf::from("."),
            download: false,
        }
    }

    /// Set the endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set a raw cookie header
    #[must_use]
    pub fn with_cookies(mut self, cookies: impl Into<String>) -> Self {
        self.cookies = Some(cookies.into());
        self
    }

    /// Set the account whose likes are collected
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the output directory
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Enable or disable image downloads
    #[must_use]
    pub fn with_download(mut self, download: bool) -> Self {
        self.download = download;
        self
    }

    /// Path of the URL list file
    pub fn output_file(&self) -> PathBuf {
        self.output_dir.join(OUTPUT_FILE_NAME)
    }
}
