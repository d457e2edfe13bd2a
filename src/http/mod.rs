//! HTTP client module
//!
//! Thin wrapper over `reqwest` for one logical session.
//!
//! # Features
//!
//! - **Default Headers**: bearer token, CSRF token and cookies set once per session
//! - **Cookie Jar**: browser cookies served through a `reqwest` cookie store
//! - **Status Checking**: any non-success response becomes `Error::HttpStatus`
//!
//! There are no retries and no timeouts: a failed request fails the run and a
//! hung request waits for as long as the server keeps it open.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};

#[cfg(test)]
mod tests;
