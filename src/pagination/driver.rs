//! Timeline walk
//!
//! `LikesPageSource` fetches pages from the GraphQL endpoint and
//! `PaginationDriver` strings them together.

use super::types::{PageOutcome, PageSource, PaginationState};
use crate::auth::Credentials;
use crate::config::HarvestConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::progress::ProgressReporter;
use crate::query::GraphqlQuery;
use crate::types::ImageUrls;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

/// Pages of the Likes timeline, fetched over an authenticated session
#[derive(Debug)]
pub struct LikesPageSource {
    client: HttpClient,
    endpoint: String,
    query: GraphqlQuery,
}

impl LikesPageSource {
    /// Create a page source from its parts
    pub fn new(client: HttpClient, endpoint: impl Into<String>, query: GraphqlQuery) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            query,
        }
    }

    /// Open a session for `config`, authenticated with `credentials`
    pub fn from_config(config: &HarvestConfig, credentials: &Credentials) -> Result<Self> {
        let http_config = HttpClientConfig::builder()
            .bearer(&config.bearer_token)
            .csrf_token(config.csrf_token.as_str())
            .build();
        let client = HttpClient::with_credentials(http_config, credentials, &config.endpoint)?;
        let query = GraphqlQuery::likes(config.user_id.as_str(), config.page_size);

        Ok(Self::new(client, config.endpoint.as_str(), query))
    }

    /// Query sent with every page request
    pub fn query(&self) -> &GraphqlQuery {
        &self.query
    }
}

#[async_trait]
impl PageSource for LikesPageSource {
    async fn fetch_page(&self, cursor: Option<&str>) -> Result<Value> {
        let params = self.query.to_params(cursor);
        debug!("Fetching likes page (cursor: {})", cursor.unwrap_or("<none>"));

        self.client
            .get_json(
                &self.endpoint,
                RequestConfig::new().query_pairs(params.as_pairs()),
            )
            .await
    }
}

/// Follows bottom cursors through a page source, collecting image URLs
pub struct PaginationDriver<S> {
    source: S,
}

impl<S: PageSource> PaginationDriver<S> {
    /// Create a driver over `source`
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Get the page source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Walk every page, returning image URLs with earlier pages first.
    ///
    /// Any fetch error aborts the walk; nothing collected so far is returned.
    pub async fn collect_image_urls(&self, reporter: &dyn ProgressReporter) -> Result<ImageUrls> {
        let mut images = ImageUrls::new();
        let mut state = PaginationState::new();
        let mut pages = 0usize;

        loop {
            let cursor = match &state {
                PaginationState::Fetching { cursor } => cursor.clone(),
                PaginationState::Done => break,
            };

            let body = self.source.fetch_page(cursor.as_deref()).await?;
            let outcome = PageOutcome::from_page(&body);
            pages += 1;

            debug!(
                "Page {pages}: {} images, next: {:?}",
                outcome.images.len(),
                outcome.next
            );
            reporter.page_fetched(outcome.images.len());

            images.extend(outcome.images);
            state = state.advance(outcome.next);
        }

        reporter.fetch_finished(images.len());
        info!("Collected {} image URLs from {pages} pages", images.len());
        Ok(images)
    }
}

impl<S> std::fmt::Debug for PaginationDriver<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginationDriver").finish_non_exhaustive()
    }
}
