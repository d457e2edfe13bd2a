//! CLI module
//!
//! Command-line interface for a harvest run.
//!
//! # Flow
//!
//! 1. Resolve credentials (`--cookies`, or the browser cookie stores)
//! 2. Walk the Likes timeline, collecting image URLs
//! 3. Write `data.json`
//! 4. With `--download`, fetch every image

mod commands;
mod runner;

pub use commands::{dir_path, Cli};
pub use runner::{RunSummary, Runner};
