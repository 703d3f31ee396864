//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes, mounted under `/api/v1`.
///
/// # Endpoints
///
/// - `POST /shorten`        - Shorten a long URL
/// - `GET  /health`         - Dependency health
/// - `GET  /{encodedKey}`   - Redirect to the long URL
///
/// The static segments take priority over `/{encodedKey}`.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{encoded_key}", get(redirect_handler))
}
