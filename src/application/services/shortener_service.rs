//! URL shortening and retrieval service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error, warn};
use url::Url;

use crate::domain::SHORT_LINK_PATH_PREFIX;
use crate::domain::entities::SaveOutcome;
use crate::domain::id_generator::IdGenerator;
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;
use crate::utils::key_codec::{encode_key, is_url_safe_key};

/// Upper bound on key generation attempts for a single long URL.
const MAX_KEY_ATTEMPTS: usize = 5;

/// Service for shortening long URLs and resolving encoded keys.
///
/// Holds no mutable state: a repository, the configured shortener host and the
/// id generator are shared read-only across concurrent calls.
pub struct ShortenerService<R: UrlMappingRepository> {
    repository: Arc<R>,
    shortener_host: String,
    id_generator: IdGenerator,
}

impl<R: UrlMappingRepository> ShortenerService<R> {
    /// Creates a new shortener service.
    ///
    /// `shortener_host` is the scheme and authority short URLs are built on,
    /// e.g. `http://localhost:8080`.
    pub fn new(repository: Arc<R>, shortener_host: impl Into<String>, id_generator: IdGenerator) -> Self {
        Self {
            repository,
            shortener_host: shortener_host.into(),
            id_generator,
        }
    }

    /// Returns the short URL for `long_url`, creating a mapping if needed.
    ///
    /// The long URL is parsed and stored in its canonical serialization, so
    /// `HTTPS://Example.COM:443` and `https://example.com/` share one key and
    /// [`retrieve`](Self::retrieve) returns exactly what was stored.
    ///
    /// # Deduplication
    ///
    /// A long URL that already has a key gets the same short URL back; nothing
    /// is generated or written.
    ///
    /// # Key Generation
    ///
    /// A new key is derived from a fresh unique id and checked before it is
    /// saved. If that key already belongs to a different long URL, a new id is
    /// drawn, up to 5 attempts in total.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if `long_url` is not an absolute URL.
    /// Repository errors are returned unchanged. Returns [`AppError::Unexpected`]
    /// if no free key was found or the short URL cannot be built.
    pub async fn shorten(&self, long_url: &str) -> Result<Url, AppError> {
        let long_url = Url::parse(long_url).map_err(|e| {
            warn!("Rejected long URL {:?}: {}", long_url, e);
            AppError::bad_request("Invalid long URL", json!({ "fields": ["long_url"] }))
        })?;
        let long_url = long_url.as_str();

        if let Some(encoded_key) = self.repository.find_key_by_long_url(long_url).await? {
            debug!("Reusing key {} for {}", encoded_key, long_url);
            return self.build_short_url(&encoded_key);
        }

        for _ in 0..MAX_KEY_ATTEMPTS {
            let candidate = encode_key(&(self.id_generator)());
            if !is_url_safe_key(&candidate) {
                error!("Generated key {:?} is not URL-safe", candidate);
                return Err(build_failure());
            }

            match self.repository.save(&candidate, long_url).await? {
                SaveOutcome::Stored { encoded_key } => return self.build_short_url(&encoded_key),
                SaveOutcome::KeyCollision => {
                    warn!("Key {} is taken, generating another", candidate);
                }
            }
        }

        error!("Failed to allocate a unique key for {}", long_url);
        Err(AppError::unexpected(
            "Failed to allocate a unique key",
            json!({ "attempts": MAX_KEY_ATTEMPTS }),
        ))
    }

    /// Resolves an encoded key to its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the key is unknown.
    /// Returns [`AppError::Unexpected`] on storage errors.
    pub async fn retrieve(&self, encoded_key: &str) -> Result<Url, AppError> {
        self.repository.find_long_url_by_key(encoded_key).await
    }

    /// Builds `{host}/api/v1/{key}` as an absolute URL.
    fn build_short_url(&self, encoded_key: &str) -> Result<Url, AppError> {
        if !is_url_safe_key(encoded_key) {
            error!("Failed to build short URL: key {:?} is not URL-safe", encoded_key);
            return Err(build_failure());
        }

        let raw = format!(
            "{}{}/{}",
            self.shortener_host.trim_end_matches('/'),
            SHORT_LINK_PATH_PREFIX,
            encoded_key
        );

        Url::parse(&raw).map_err(|e| {
            error!("Failed to build short URL from {:?}: {}", raw, e);
            build_failure()
        })
    }
}

fn build_failure() -> AppError {
    AppError::unexpected("Failed to build short URL", json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id_generator::fixed_generator;
    use crate::domain::repositories::MockUrlMappingRepository;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const HOST: &str = "http://host-url.com";
    const LONG_URL: &str = "https://example.com/a";

    fn service(repo: MockUrlMappingRepository) -> ShortenerService<MockUrlMappingRepository> {
        ShortenerService::new(Arc::new(repo), HOST, fixed_generator("random-generated-uuid"))
    }

    #[tokio::test]
    async fn test_shorten_new_url() {
        let mut repo = MockUrlMappingRepository::new();

        repo.expect_find_key_by_long_url()
            .withf(|url| url == LONG_URL)
            .times(1)
            .returning(|_| Ok(None));

        repo.expect_save()
            .withf(|key, url| key == "cmFuZG9" && url == LONG_URL)
            .times(1)
            .returning(|key, _| {
                Ok(SaveOutcome::Stored {
                    encoded_key: key.to_string(),
                })
            });

        let short_url = service(repo).shorten(LONG_URL).await.unwrap();

        assert_eq!(short_url.as_str(), "http://host-url.com/api/v1/cmFuZG9");
    }

    #[tokio::test]
    async fn test_shorten_existing_url_skips_save() {
        let mut repo = MockUrlMappingRepository::new();

        repo.expect_find_key_by_long_url()
            .times(1)
            .returning(|_| Ok(Some("xZya7gG".to_string())));

        repo.expect_save().times(0);

        let short_url = service(repo).shorten(LONG_URL).await.unwrap();

        assert_eq!(short_url.as_str(), "http://host-url.com/api/v1/xZya7gG");
    }

    #[tokio::test]
    async fn test_shorten_lookup_error_is_propagated() {
        let mut repo = MockUrlMappingRepository::new();

        repo.expect_find_key_by_long_url()
            .times(1)
            .returning(|_| Err(AppError::unexpected("Database error", json!({}))));

        repo.expect_save().times(0);

        let err = service(repo).shorten(LONG_URL).await.unwrap_err();

        assert!(matches!(err, AppError::Unexpected { .. }));
        assert_eq!(err.to_string(), "Database error");
    }

    #[tokio::test]
    async fn test_shorten_save_error_is_propagated() {
        let mut repo = MockUrlMappingRepository::new();

        repo.expect_find_key_by_long_url()
            .times(1)
            .returning(|_| Ok(None));

        repo.expect_save()
            .times(1)
            .returning(|_, _| Err(AppError::unexpected("Database error", json!({}))));

        let err = service(repo).shorten(LONG_URL).await.unwrap_err();

        assert!(matches!(err, AppError::Unexpected { .. }));
        assert_eq!(err.to_string(), "Database error");
    }

    #[tokio::test]
    async fn test_shorten_existing_key_not_url_safe_fails_to_build() {
        let mut repo = MockUrlMappingRepository::new();

        repo.expect_find_key_by_long_url()
            .times(1)
            .returning(|_| Ok(Some("\u{7}".to_string())));

        let err = service(repo).shorten(LONG_URL).await.unwrap_err();

        assert!(matches!(err, AppError::Unexpected { .. }));
        assert_eq!(err.to_string(), "Failed to build short URL");
    }

    #[tokio::test]
    async fn test_shorten_invalid_host_fails_to_build() {
        let mut repo = MockUrlMappingRepository::new();

        repo.expect_find_key_by_long_url()
            .times(1)
            .returning(|_| Ok(Some("xZya7gG".to_string())));

        let service = ShortenerService::new(
            Arc::new(repo),
            "http://host url.com",
            fixed_generator("random-generated-uuid"),
        );

        let err = service.shorten(LONG_URL).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to build short URL");
    }

    #[tokio::test]
    async fn test_shorten_uses_key_returned_by_store() {
        let mut repo = MockUrlMappingRepository::new();

        repo.expect_find_key_by_long_url()
            .times(1)
            .returning(|_| Ok(None));

        // a concurrent request stored the same URL first
        repo.expect_save().times(1).returning(|_, _| {
            Ok(SaveOutcome::Stored {
                encoded_key: "NGVmMjk".to_string(),
            })
        });

        let short_url = service(repo).shorten(LONG_URL).await.unwrap();

        assert_eq!(short_url.as_str(), "http://host-url.com/api/v1/NGVmMjk");
    }

    #[tokio::test]
    async fn test_shorten_regenerates_key_on_collision() {
        let mut repo = MockUrlMappingRepository::new();

        repo.expect_find_key_by_long_url()
            .times(1)
            .returning(|_| Ok(None));

        repo.expect_save()
            .withf(|key, _| key == "Zmlyc3Q")
            .times(1)
            .returning(|_, _| Ok(SaveOutcome::KeyCollision));

        repo.expect_save()
            .withf(|key, _| key == "c2Vjb25")
            .times(1)
            .returning(|key, _| {
                Ok(SaveOutcome::Stored {
                    encoded_key: key.to_string(),
                })
            });

        let calls = Arc::new(AtomicUsize::new(0));
        let generator: IdGenerator = Arc::new(move || {
            match calls.fetch_add(1, Ordering::SeqCst) {
                0 => "first-id".to_string(),
                _ => "second-id".to_string(),
            }
        });

        let service = ShortenerService::new(Arc::new(repo), HOST, generator);
        let short_url = service.shorten(LONG_URL).await.unwrap();

        assert_eq!(short_url.as_str(), "http://host-url.com/api/v1/c2Vjb25");
    }

    #[tokio::test]
    async fn test_shorten_gives_up_after_max_attempts() {
        let mut repo = MockUrlMappingRepository::new();

        repo.expect_find_key_by_long_url()
            .times(1)
            .returning(|_| Ok(None));

        repo.expect_save()
            .times(MAX_KEY_ATTEMPTS)
            .returning(|_, _| Ok(SaveOutcome::KeyCollision));

        let err = service(repo).shorten(LONG_URL).await.unwrap_err();

        assert!(matches!(err, AppError::Unexpected { .. }));
    }

    #[tokio::test]
    async fn test_shorten_trims_trailing_slash_from_host() {
        let mut repo = MockUrlMappingRepository::new();

        repo.expect_find_key_by_long_url()
            .times(1)
            .returning(|_| Ok(Some("xZya7gG".to_string())));

        let service = ShortenerService::new(
            Arc::new(repo),
            "http://host-url.com/",
            fixed_generator("unused"),
        );

        let short_url = service.shorten(LONG_URL).await.unwrap();

        assert_eq!(short_url.as_str(), "http://host-url.com/api/v1/xZya7gG");
    }

    #[tokio::test]
    async fn test_shorten_uses_canonical_long_url() {
        let mut repo = MockUrlMappingRepository::new();

        repo.expect_find_key_by_long_url()
            .withf(|url| url == "https://example.com/a")
            .times(1)
            .returning(|_| Ok(None));

        repo.expect_save()
            .withf(|_, url| url == "https://example.com/a")
            .times(1)
            .returning(|key, _| {
                Ok(SaveOutcome::Stored {
                    encoded_key: key.to_string(),
                })
            });

        let short_url = service(repo)
            .shorten("HTTPS://Example.COM:443/a")
            .await
            .unwrap();

        assert_eq!(short_url.as_str(), "http://host-url.com/api/v1/cmFuZG9");
    }

    #[tokio::test]
    async fn test_shorten_relative_url_is_bad_request() {
        let mut repo = MockUrlMappingRepository::new();

        repo.expect_find_key_by_long_url().times(0);
        repo.expect_save().times(0);

        let err = service(repo).shorten("/just/a/path").await.unwrap_err();

        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn test_shorten_empty_generated_key_is_never_saved() {
        let mut repo = MockUrlMappingRepository::new();

        repo.expect_find_key_by_long_url()
            .times(1)
            .returning(|_| Ok(None));

        repo.expect_save().times(0);

        let service = ShortenerService::new(Arc::new(repo), HOST, fixed_generator(""));
        let err = service.shorten(LONG_URL).await.unwrap_err();

        assert!(matches!(err, AppError::Unexpected { .. }));
        assert_eq!(err.to_string(), "Failed to build short URL");
    }

    #[tokio::test]
    async fn test_retrieve_success() {
        let mut repo = MockUrlMappingRepository::new();

        repo.expect_find_long_url_by_key()
            .withf(|key| key == "a-encoded-key")
            .times(1)
            .returning(|_| Ok(Url::parse("http://host-url.com").unwrap()));

        let long_url = service(repo).retrieve("a-encoded-key").await.unwrap();

        assert_eq!(long_url.as_str(), "http://host-url.com/");
    }

    #[tokio::test]
    async fn test_retrieve_not_found_is_propagated() {
        let mut repo = MockUrlMappingRepository::new();

        repo.expect_find_long_url_by_key()
            .withf(|key| key == "NGVmMjk")
            .times(1)
            .returning(|_| Err(AppError::not_found("Short link not found", json!({}))));

        let err = service(repo).retrieve("NGVmMjk").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_retrieve_unexpected_is_propagated() {
        let mut repo = MockUrlMappingRepository::new();

        repo.expect_find_long_url_by_key()
            .times(1)
            .returning(|_| Err(AppError::unexpected("Database error", json!({}))));

        let err = service(repo).retrieve("a-encoded-key").await.unwrap_err();

        assert!(matches!(err, AppError::Unexpected { .. }));
    }
}
