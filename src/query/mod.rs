//! GraphQL query module
//!
//! Turns the nested option structure of a GraphQL request into query-string
//! parameters.
//!
//! # Overview
//!
//! The endpoint expects every top-level section (`variables`, `features`,
//! `fieldToggles`) as its own query parameter holding compact JSON. The
//! pagination cursor travels inside `variables` and nowhere else.

mod builder;
mod types;

pub use builder::{likes_features, likes_field_toggles, GraphqlQuery};
pub use types::QueryParams;

#[cfg(test)]
mod tests;
