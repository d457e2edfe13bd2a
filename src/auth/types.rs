//! Credential types

use crate::error::Result;
use crate::types::CookieMap;
use reqwest::cookie::Jar;
use std::sync::Arc;
use url::Url;

/// A cookie as read from a browser store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserCookie {
    /// Domain the cookie is scoped to (e.g. `.x.com`)
    pub domain: String,
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
}

impl BrowserCookie {
    /// Create a new browser cookie
    pub fn new(
        domain: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Session credentials sent with every timeline request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Raw `Cookie` header copied from the browser
    RawCookieHeader(String),
    /// Cookie name to value, served through an HTTP cookie jar
    CookieJar(CookieMap),
}

impl Credentials {
    /// The header value to send verbatim, for the raw form
    pub fn cookie_header(&self) -> Option<&str> {
        match self {
            Credentials::RawCookieHeader(header) => Some(header),
            Credentials::CookieJar(_) => None,
        }
    }

    /// Build a cookie jar holding every cookie for `endpoint`, for the mapping form
    pub fn jar_for(&self, endpoint: &str) -> Result<Option<Arc<Jar>>> {
        match self {
            Credentials::RawCookieHeader(_) => Ok(None),
            Credentials::CookieJar(cookies) => {
                let url = Url::parse(endpoint)?;
                let jar = Jar::default();
                for (name, value) in cookies {
                    jar.add_cookie_str(&format!("{name}={value}"), &url);
                }
                Ok(Some(Arc::new(jar)))
            }
        }
    }

    /// Number of cookies carried (raw headers count as one)
    pub fn len(&self) -> usize {
        match self {
            Credentials::RawCookieHeader(_) => 1,
            Credentials::CookieJar(cookies) => cookies.len(),
        }
    }

    /// Check if no cookie is carried
    pub fn is_empty(&self) -> bool {
        match self {
            Credentials::RawCookieHeader(header) => header.is_empty(),
            Credentials::CookieJar(cookies) => cookies.is_empty(),
        }
    }
}
