//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries are
//! bound at runtime and every call runs under a per-query deadline.
//!
//! # Repositories
//!
//! - [`PgUrlMappingRepository`] - URL mapping storage and retrieval
//! - [`PgHealthProbe`] - Database liveness check

pub mod deadline;
pub mod pg_health_probe;
pub mod pg_url_mapping_repository;

pub use pg_health_probe::PgHealthProbe;
pub use pg_url_mapping_repository::PgUrlMappingRepository;
