//! Application error kinds and their HTTP representation.
//!
//! Every failure the core reports is one of three kinds. The HTTP status for
//! each kind is fixed by [`AppError::status_code`]; storage-specific detail is
//! logged where it happens and never carried into the response body.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload returned to HTTP clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed inbound payload.
    #[error("{message}")]
    BadRequest { message: String, details: Value },

    /// Lookup by key found nothing.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Storage failure, unparseable stored URL, or short URL build failure.
    #[error("{message}")]
    Unexpected { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::BadRequest {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn unexpected(message: impl Into<String>, details: Value) -> Self {
        Self::Unexpected {
            message: message.into(),
            details,
        }
    }

    /// Maps the error kind to its transport status.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest { .. } => "bad_request",
            AppError::NotFound { .. } => "not_found",
            AppError::Unexpected { .. } => "unexpected",
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            AppError::BadRequest { message, details }
            | AppError::NotFound { message, details }
            | AppError::Unexpected { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Failed to parse request body: {}", rejection.body_text());
        AppError::bad_request("Invalid body", json!({ "reason": rejection.body_text() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
        fields.sort();
        AppError::bad_request("Invalid body", json!({ "fields": fields }))
    }
}
