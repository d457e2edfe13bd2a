//! Pagination types and traits
//!
//! Defines the page source abstraction and the two-state walk.

use crate::config::MEDIA_URL_KEY;
use crate::error::Result;
use crate::extract::{bottom_cursor, collect_strings_by_key};
use async_trait::async_trait;
use serde_json::Value;

/// What to do after a page has been processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// Fetch the page this cursor points at
    Continue {
        /// Cursor for the next request
        cursor: String,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Decide from a page's image count and its bottom cursor.
    ///
    /// An empty page ends the walk even when it carries a cursor.
    pub fn after(images_on_page: usize, cursor: Option<String>) -> Self {
        match cursor {
            Some(cursor) if images_on_page > 0 => Self::Continue { cursor },
            _ => Self::Done,
        }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// Everything taken out of one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutcome {
    /// Image URLs, in document order
    pub images: Vec<String>,
    /// Where to go next
    pub next: NextPage,
}

impl PageOutcome {
    /// Extract images and the next step from a page body
    pub fn from_page(body: &Value) -> Self {
        let images = collect_strings_by_key(body, MEDIA_URL_KEY);
        let next = NextPage::after(images.len(), bottom_cursor(body));
        Self { images, next }
    }
}

/// State of a timeline walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationState {
    /// A page is to be fetched, at `cursor` (the first page has none)
    Fetching {
        /// Cursor of the page to fetch
        cursor: Option<String>,
    },
    /// Walk finished
    Done,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::Fetching { cursor: None }
    }
}

impl PaginationState {
    /// Initial state: fetching the first page
    pub fn new() -> Self {
        Self::default()
    }

    /// Move on according to a page's outcome
    #[must_use]
    pub fn advance(self, next: NextPage) -> Self {
        match (self, next) {
            (Self::Done, _) | (_, NextPage::Done) => Self::Done,
            (Self::Fetching { .. }, NextPage::Continue { cursor }) => Self::Fetching {
                cursor: Some(cursor),
            },
        }
    }

    /// Check if the walk has finished
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Source of timeline pages
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page at `cursor`, or the first page when `cursor` is `None`
    async fn fetch_page(&self, cursor: Option<&str>) -> Result<Value>;
}
