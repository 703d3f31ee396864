//! URL mapping entity.

/// A persisted pairing of an encoded key and the long URL it stands for.
///
/// Created the first time a long URL is shortened; never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub encoded_key: String,
    pub long_url: String,
}

impl UrlMapping {
    pub fn new(encoded_key: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            encoded_key: encoded_key.into(),
            long_url: long_url.into(),
        }
    }
}

/// Result of persisting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The long URL is now stored under `encoded_key`.
    ///
    /// When another request stored the same long URL first, this carries that
    /// request's key rather than the one passed to `save`.
    Stored { encoded_key: String },

    /// The key is already assigned to a different long URL; nothing was written.
    KeyCollision,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_mapping_creation() {
        let mapping = UrlMapping::new("xZya7gG", "https://example.com/a");

        assert_eq!(mapping.encoded_key, "xZya7gG");
        assert_eq!(mapping.long_url, "https://example.com/a");
    }
}
