//! Fixed-width digest of a long URL, used as its uniqueness key in storage.

use sha2::{Digest, Sha256};

/// Returns the SHA-256 of the URL's bytes.
pub fn long_url_digest(long_url: &str) -> Vec<u8> {
    Sha256::digest(long_url.as_bytes()).to_vec()
}
