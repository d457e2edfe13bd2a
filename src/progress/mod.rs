//! Progress reporting
//!
//! User-visible progress for the two long phases of a run: walking the
//! timeline and downloading images. Reporters are built by the caller and
//! passed down, never reached through globals.

mod reporters;

pub use reporters::{ProgressReporter, SilentReporter, TerminalReporter};

#[cfg(test)]
mod tests;
