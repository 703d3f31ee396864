//! Injectable source of unique identifiers.
//!
//! The shortener never reaches for global randomness directly; it calls the
//! generator it was constructed with, so tests can supply fixed ids.

use std::sync::Arc;

/// Produces a fresh unique identifier on every call.
pub type IdGenerator = Arc<dyn Fn() -> String + Send + Sync>;

/// Generator backed by random (version 4) UUIDs in hyphenated form.
pub fn uuid_v4_generator() -> IdGenerator {
    Arc::new(|| uuid::Uuid::new_v4().to_string())
}

/// Generator that always returns `id`.
pub fn fixed_generator(id: impl Into<String>) -> IdGenerator {
    let id = id.into();
    Arc::new(move || id.clone())
}
