//! Shared state injected into every HTTP handler.

use std::sync::Arc;

use crate::application::services::{HealthService, ShortenerService};
use crate::infrastructure::persistence::PgUrlMappingRepository;

#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<ShortenerService<PgUrlMappingRepository>>,
    pub health_service: Arc<HealthService>,
}

impl AppState {
    pub fn new(
        shortener_service: Arc<ShortenerService<PgUrlMappingRepository>>,
        health_service: Arc<HealthService>,
    ) -> Self {
        Self {
            shortener_service,
            health_service,
        }
    }
}
