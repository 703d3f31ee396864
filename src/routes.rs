//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/v1/shorten`       - Shorten a long URL
//! - `GET  /api/v1/health`        - Dependency health
//! - `GET  /api/v1/{encodedKey}`  - Redirect to the long URL
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::domain::SHORT_LINK_PATH_PREFIX;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .nest(SHORT_LINK_PATH_PREFIX, api::routes::public_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
