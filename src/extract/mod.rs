//! Tree extraction module
//!
//! Schema-less search over JSON responses.
//!
//! # Overview
//!
//! Timeline responses nest tweets many levels deep and the nesting changes
//! between API revisions, so nothing here follows a fixed path. Instead a
//! depth-first walk visits every node in document order and the helpers pick
//! out what they need by key name:
//! - `collect_by_key` - every value stored under a key, anywhere
//! - `find_first` - the first object matching a predicate
//! - `bottom_cursor` - the cursor pointing at older entries

mod walker;

pub use walker::{
    bottom_cursor, collect_by_key, collect_strings_by_key, find_first, walk, Node, Walk,
};
