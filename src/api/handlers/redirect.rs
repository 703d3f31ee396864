//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an encoded key to its long URL.
///
/// # Endpoint
///
/// `GET /api/v1/{encodedKey}`
///
/// # Response
///
/// **302 Found** with the long URL in the `Location` header.
///
/// # Errors
///
/// Returns 404 Not Found if the key is unknown.
/// Returns 500 Internal Server Error on any other storage failure.
pub async fn redirect_handler(
    Path(encoded_key): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.shortener_service.retrieve(&encoded_key).await?;

    debug!("Redirecting {} to {}", encoded_key, long_url);

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url.to_string())]))
}
