//! Repository trait for encoded key ↔ long URL mappings.

use crate::domain::entities::SaveOutcome;
use crate::error::AppError;
use async_trait::async_trait;
use url::Url;

/// Persistence contract for URL mappings.
///
/// Implementations translate storage failures into [`AppError`] kinds and must
/// honour cancellation: dropping a returned future abandons the underlying
/// query, and each query runs under the implementation's deadline.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlMappingRepository: Send + Sync {
    /// Finds the key already assigned to `long_url`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(key))` if the long URL has been shortened before
    /// - `Ok(None)` if no row matches
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unexpected`] on any storage failure.
    async fn find_key_by_long_url(&self, long_url: &str) -> Result<Option<String>, AppError>;

    /// Finds the long URL stored under `encoded_key`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row matches the key.
    /// Returns [`AppError::Unexpected`] on storage failures or when the stored
    /// value does not parse as an absolute URL.
    async fn find_long_url_by_key(&self, encoded_key: &str) -> Result<Url, AppError>;

    /// Stores a new mapping.
    ///
    /// A long URL that is already stored is not an error: the existing key is
    /// returned in [`SaveOutcome::Stored`]. A key that is already taken by another
    /// long URL yields [`SaveOutcome::KeyCollision`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unexpected`] on any other storage failure.
    async fn save(&self, encoded_key: &str, long_url: &str) -> Result<SaveOutcome, AppError>;
}
