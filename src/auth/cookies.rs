//! Browser cookie sources

use super::types::BrowserCookie;
use crate::error::{Error, Result};
use crate::types::CookieMap;
use tracing::debug;

/// Somewhere cookies can be enumerated from
pub trait CookieSource: Send + Sync {
    /// Every cookie the source knows about
    fn load(&self) -> Result<Vec<BrowserCookie>>;
}

/// Reads the cookie stores of every installed browser
#[derive(Debug, Clone, Default)]
pub struct BrowserCookieSource {
    /// Restrict the read to hosts containing these names (all hosts when empty)
    domains: Vec<String>,
}

impl BrowserCookieSource {
    /// Read cookies for every host
    pub fn new() -> Self {
        Self::default()
    }

    /// Only read cookies whose host contains `domain`
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domains.push(domain.into());
        self
    }
}

impl CookieSource for BrowserCookieSource {
    fn load(&self) -> Result<Vec<BrowserCookie>> {
        let domains = if self.domains.is_empty() {
            None
        } else {
            Some(self.domains.clone())
        };

        let cookies = rookie::load(domains).map_err(|e| Error::cookie_store(e.to_string()))?;
        debug!("Read {} cookies from browser stores", cookies.len());

        Ok(cookies
            .into_iter()
            .map(|c| BrowserCookie::new(c.domain, c.name, c.value))
            .collect())
    }
}

/// A fixed list of cookies
#[derive(Debug, Clone, Default)]
pub struct StaticCookieSource {
    cookies: Vec<BrowserCookie>,
}

impl StaticCookieSource {
    /// Serve the given cookies
    pub fn new(cookies: Vec<BrowserCookie>) -> Self {
        Self { cookies }
    }
}

impl CookieSource for StaticCookieSource {
    fn load(&self) -> Result<Vec<BrowserCookie>> {
        Ok(self.cookies.clone())
    }
}

/// Keep the cookies scoped exactly to `domain`, keyed by name.
///
/// A name seen twice keeps the value read last.
pub fn cookies_to_mapping(
    cookies: impl IntoIterator<Item = BrowserCookie>,
    domain: &str,
) -> CookieMap {
    cookies
        .into_iter()
        .filter(|cookie| cookie.domain == domain)
        .map(|cookie| (cookie.name, cookie.value))
        .collect()
}
