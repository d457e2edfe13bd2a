//! Common types used throughout likes-harvest
//!
//! Shared type aliases used across multiple modules.

use std::collections::BTreeMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type. Keys keep the order they were inserted or received in.
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Cookie name to value, for a single domain
pub type CookieMap = BTreeMap<String, String>;

/// Ordered list of image URLs collected across all pages
pub type ImageUrls = Vec<String>;
