//! Image download module
//!
//! Fetches images one at a time into the output directory, each under the
//! last path segment of its URL. Images sharing a file name overwrite each
//! other; the first failure stops the remaining downloads.

mod downloader;

pub use downloader::{file_name_for, Downloader};
