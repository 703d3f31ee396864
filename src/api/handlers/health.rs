//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Reports the liveness of each storage dependency.
///
/// # Endpoint
///
/// `GET /api/v1/health`
///
/// # Response
///
/// Always **200 OK**; an unreachable dependency only flips its value.
///
/// ```json
/// { "postgres": true }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse(state.health_service.check().await))
}
