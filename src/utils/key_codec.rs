//! Short key derivation.
//!
//! Turns an opaque unique identifier into a compact, URL-path-safe key.

use base64::Engine as _;

/// Maximum length of an encoded key.
pub const KEY_LENGTH: usize = 7;

/// Derives a short key from a unique identifier.
///
/// Encodes the identifier's bytes as URL-safe base64 without padding and keeps
/// the first [`KEY_LENGTH`] characters. Shorter encodings are returned as-is.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(encode_key("random-generated-uuid"), "cmFuZG9");
/// ```
pub fn encode_key(id: &str) -> String {
    let mut key = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(id.as_bytes());
    // base64 output is ASCII, so byte truncation lands on a char boundary.
    key.truncate(KEY_LENGTH);
    key
}

/// Returns true when `key` is non-empty and uses only the URL-safe base64 alphabet.
pub fn is_url_safe_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
