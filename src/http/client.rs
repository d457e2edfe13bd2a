//! HTTP client for a single session
//!
//! Provides a client that handles:
//! - Session-wide default headers
//! - Cookie credentials (raw header or jar)
//! - JSON and raw body responses
//! - Turning non-success statuses into errors

use crate::auth::Credentials;
use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, COOKIE};
use reqwest::{Client, Response};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Header carrying the session's CSRF token
const CSRF_HEADER: &str = "x-csrf-token";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Default headers for all requests
    pub default_headers: BTreeMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            default_headers: BTreeMap::new(),
            user_agent: format!("likes-harvest/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Send `authorization: Bearer <token>` with every request
    pub fn bearer(self, token: impl AsRef<str>) -> Self {
        let value = format!("Bearer {}", token.as_ref());
        self.header(AUTHORIZATION.as_str(), value)
    }

    /// Send the session's CSRF token with every request
    pub fn csrf_token(self, token: impl Into<String>) -> Self {
        self.header(CSRF_HEADER, token)
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters, sent in order
    pub query: Vec<(String, String)>,
    /// Request headers
    pub headers: BTreeMap<String, String>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add several query parameters
    #[must_use]
    pub fn query_pairs(mut self, pairs: &[(String, String)]) -> Self {
        self.query.extend_from_slice(pairs);
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// HTTP client bound to one session's headers and cookies
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    has_cookie_jar: bool,
}

impl HttpClient {
    /// Create a client with default configuration and no credentials
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a client with custom configuration and no credentials
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(build_header_map(&config.default_headers)?)
            .build()?;

        Ok(Self {
            client,
            config,
            has_cookie_jar: false,
        })
    }

    /// Create a client that sends `credentials` to `endpoint`
    pub fn with_credentials(
        config: HttpClientConfig,
        credentials: &Credentials,
        endpoint: &str,
    ) -> Result<Self> {
        let mut headers = build_header_map(&config.default_headers)?;
        let mut builder = Client::builder().user_agent(&config.user_agent);

        match credentials {
            Credentials::RawCookieHeader(raw) => {
                headers.insert(COOKIE, header_value(COOKIE.as_str(), raw)?);
            }
            Credentials::CookieJar(_) => {
                if let Some(jar) = credentials.jar_for(endpoint)? {
                    builder = builder.cookie_provider(jar);
                }
            }
        }

        let client = builder.default_headers(headers).build()?;
        Ok(Self {
            client,
            config,
            has_cookie_jar: matches!(credentials, Credentials::CookieJar(_)),
        })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Check if cookies are served from a jar
    pub fn has_cookie_jar(&self) -> bool {
        self.has_cookie_jar
    }

    /// Make a GET request, failing on any non-success status
    pub async fn get(&self, url: &str, config: RequestConfig) -> Result<Response> {
        let mut req = self.client.get(url);

        for (key, value) in &config.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!("Request succeeded: GET {}", response.url());
        Ok(response)
    }

    /// Make a GET request and parse the JSON body
    pub async fn get_json(&self, url: &str, config: RequestConfig) -> Result<Value> {
        let response = self.get(url, config).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Make a GET request and return the raw body
    pub async fn get_bytes(&self, url: &str) -> Result<Bytes> {
        let response = self.get(url, RequestConfig::default()).await?;
        Ok(response.bytes().await?)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("user_agent", &self.config.user_agent)
            .field(
                "default_headers",
                &self.config.default_headers.keys().collect::<Vec<_>>(),
            )
            .field("has_cookie_jar", &self.has_cookie_jar)
            .finish_non_exhaustive()
    }
}

/// Convert string headers into a typed header map
fn build_header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| Error::invalid_header(key.as_str(), e.to_string()))?;
        map.insert(name, header_value(key, value)?);
    }
    Ok(map)
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    let mut value =
        HeaderValue::from_str(value).map_err(|e| Error::invalid_header(name, e.to_string()))?;
    value.set_sensitive(true);
    Ok(value)
}
