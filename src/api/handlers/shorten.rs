//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or reuses) the short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/v1/shorten`
///
/// # Request Body
///
/// ```json
/// { "longUrl": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// **201 Created**
///
/// ```json
/// { "shortUrl": "http://localhost:8080/api/v1/NGVmMjk" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON, lacks `longUrl`, or
/// `longUrl` is not an absolute URL. Returns 500 on storage failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let short_url = state.shortener_service.shorten(&payload.long_url).await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: short_url.to_string(),
        }),
    ))
}
