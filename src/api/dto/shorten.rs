//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single long URL.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL to shorten (must be absolute).
    #[validate(url(message = "Invalid URL format"))]
    pub long_url: String,
}

/// Response carrying the short URL for the submitted long URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case() {
        let request: ShortenRequest =
            serde_json::from_str(r#"{"longUrl": "https://example.com/a"}"#).unwrap();
        assert_eq!(request.long_url, "https://example.com/a");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_requires_long_url() {
        let result = serde_json::from_str::<ShortenRequest>(r#"{"url": "https://example.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_rejects_relative_url() {
        let request: ShortenRequest = serde_json::from_str(r#"{"longUrl": "example"}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_response_uses_camel_case() {
        let response = ShortenResponse {
            short_url: "http://host-url.com/api/v1/cmFuZG9".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"shortUrl":"http://host-url.com/api/v1/cmFuZG9"}"#
        );
    }
}
