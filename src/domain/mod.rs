//! Domain layer containing business entities and contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`id_generator`] - Injectable unique-id source used for key generation
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod entities;
pub mod id_generator;
pub mod repositories;

/// Path under which the redirect route is mounted; short URLs are built beneath it.
pub const SHORT_LINK_PATH_PREFIX: &str = "/api/v1";
