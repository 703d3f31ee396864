//! Utility functions shared across layers.
//!
//! - [`key_codec`] - Encoded key derivation and validation
//! - [`db_error`] - PostgreSQL error classification
//! - [`url_digest`] - Fixed-width long URL digest

pub mod db_error;
pub mod key_codec;
pub mod url_digest;
