//! Output module
//!
//! Persists the collected image URLs.
//!
//! The list is written in full before any download starts, so the URLs
//! survive a download that fails halfway.

mod writer;

pub use writer::{save_urls, to_pretty_json};
