// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # likes-harvest
//!
//! Collects the image URLs of every post a user liked on X, through the same
//! internal GraphQL endpoint the web client uses, and optionally downloads
//! the images.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use likes_harvest::cli::Runner;
//! use likes_harvest::config::HarvestConfig;
//!
//! #[tokio::main]
//! async fn main() -> likes_harvest::Result<()> {
//!     let config = HarvestConfig::new("<x-csrf-token>")
//!         .with_cookies("auth_token=...; ct0=...")
//!         .with_output_dir("likes");
//!
//!     let summary = Runner::new(config).run().await?;
//!     println!("{} images", summary.images.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  cli: args → HarvestConfig → Credentials → Runner::run()  │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────┬─────────────────┴───────────┬──────────┬──────────┐
//! │   Auth   │        Pagination           │  Output  │ Download │
//! ├──────────┼─────────────────────────────┼──────────┼──────────┤
//! │ Raw      │ Query  → HTTP → Extract     │ data.json│ one by   │
//! │ Browser  │   ↑ bottom cursor ┘         │          │ one      │
//! └──────────┴─────────────────────────────┴──────────┴──────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Run configuration and API constants
pub mod config;

/// Session credentials and browser cookie sources
pub mod auth;

/// HTTP client
pub mod http;

/// GraphQL query parameters
pub mod query;

/// Schema-less JSON search
pub mod extract;

/// Timeline pagination
pub mod pagination;

/// Progress reporting
pub mod progress;

/// `data.json` persistence
pub mod output;

/// Image downloads
pub mod download;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
