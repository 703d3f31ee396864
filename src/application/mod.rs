//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls and key generation, and expose a clean
//! API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Shortening and key resolution
//! - [`services::health_service::HealthService`] - Dependency health reporting

pub mod services;
