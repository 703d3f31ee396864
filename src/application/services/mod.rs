//! Business logic services for the application layer.

pub mod health_service;
pub mod shortener_service;

pub use health_service::HealthService;
pub use shortener_service::ShortenerService;
