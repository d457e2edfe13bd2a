//! Pagination module
//!
//! Walks the Likes timeline page by page, following the bottom cursor.
//!
//! # Overview
//!
//! Each step fetches one page, pulls every image URL out of it and looks for
//! the cursor to the next (older) page. The walk ends when a page carries no
//! cursor, or when a page yields no images at all: the API keeps handing out
//! cursors past the end of the timeline, so an empty page is taken as the end
//! even if it points further.

mod driver;
mod types;

pub use driver::{LikesPageSource, PaginationDriver};
pub use types::{NextPage, PageOutcome, PageSource, PaginationState};
