//! Core domain entities.
//!
//! - [`UrlMapping`] - an encoded key and its long URL
//! - [`SaveOutcome`] - what happened when a new mapping was persisted

pub mod url_mapping;

pub use url_mapping::{SaveOutcome, UrlMapping};
