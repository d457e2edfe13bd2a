//! Credentials module
//!
//! Supports: a raw `Cookie` header, or a cookie jar read from the local
//! browsers.
//!
//! Exactly one form is active per run. The browser form goes through the
//! `CookieSource` trait so the store can be swapped out in tests.

mod cookies;
mod types;

pub use cookies::{cookies_to_mapping, BrowserCookieSource, CookieSource, StaticCookieSource};
pub use types::{BrowserCookie, Credentials};
