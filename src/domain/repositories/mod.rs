//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern. They are
//! implemented by concrete types in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UrlMappingRepository`] - Key ↔ long URL storage
//! - [`DependencyProbe`] - Liveness of a storage dependency
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod dependency_probe;
pub mod url_mapping_repository;

pub use dependency_probe::DependencyProbe;
pub use url_mapping_repository::UrlMappingRepository;

#[cfg(test)]
pub use dependency_probe::MockDependencyProbe;
#[cfg(test)]
pub use url_mapping_repository::MockUrlMappingRepository;
