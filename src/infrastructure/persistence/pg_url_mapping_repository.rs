//! PostgreSQL implementation of the URL mapping repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};
use url::Url;

use crate::domain::entities::{SaveOutcome, UrlMapping};
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::deadline::{StorageFailure, with_deadline};
use crate::utils::db_error::is_unique_violation_on_key;
use crate::utils::url_digest::long_url_digest;

/// PostgreSQL repository for the `urls` table.
///
/// Every query runs under `query_timeout`; driver errors are logged here and
/// reported to callers only as [`AppError`] kinds.
pub struct PgUrlMappingRepository {
    pool: Arc<PgPool>,
    query_timeout: Duration,
}

impl PgUrlMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Counts stored mappings.
    pub async fn count(&self) -> Result<i64, AppError> {
        with_deadline(
            self.query_timeout,
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls").fetch_one(self.pool.as_ref()),
        )
        .await
        .map_err(|e| unexpected("count urls", e))
    }

    /// Returns the most recently created mappings, newest first.
    pub async fn recent(&self, limit: i64) -> Result<Vec<UrlMapping>, AppError> {
        let rows = with_deadline(
            self.query_timeout,
            sqlx::query_as::<_, (String, String)>(
                r#"
                SELECT encoded_key, long_url
                FROM urls
                ORDER BY created_at DESC
                LIMIT $1
                "#,
            )
            .bind(limit)
            .fetch_all(self.pool.as_ref()),
        )
        .await
        .map_err(|e| unexpected("list recent urls", e))?;

        Ok(rows
            .into_iter()
            .map(|(encoded_key, long_url)| UrlMapping::new(encoded_key, long_url))
            .collect())
    }
}

/// Logs a storage failure and reduces it to [`AppError::Unexpected`].
fn unexpected(operation: &str, e: StorageFailure) -> AppError {
    error!("Failed to {}: {}", operation, e);
    AppError::unexpected("Database error", json!({}))
}

#[async_trait]
impl UrlMappingRepository for PgUrlMappingRepository {
    async fn find_key_by_long_url(&self, long_url: &str) -> Result<Option<String>, AppError> {
        with_deadline(
            self.query_timeout,
            sqlx::query_scalar::<_, String>(
                "SELECT encoded_key FROM urls WHERE long_url_hash = $1 AND long_url = $2",
            )
            .bind(long_url_digest(long_url))
            .bind(long_url)
            .fetch_optional(self.pool.as_ref()),
        )
        .await
        .map_err(|e| unexpected("find encoded key", e))
    }

    async fn find_long_url_by_key(&self, encoded_key: &str) -> Result<Url, AppError> {
        let stored = with_deadline(
            self.query_timeout,
            sqlx::query_scalar::<_, String>("SELECT long_url FROM urls WHERE encoded_key = $1")
                .bind(encoded_key)
                .fetch_optional(self.pool.as_ref()),
        )
        .await
        .map_err(|e| unexpected("find long URL", e))?;

        let Some(stored) = stored else {
            warn!("Encoded key {} not found", encoded_key);
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "encoded_key": encoded_key }),
            ));
        };

        Url::parse(&stored).map_err(|e| {
            error!("Failed to parse long URL stored under {}: {}", encoded_key, e);
            AppError::unexpected("Database error", json!({}))
        })
    }

    async fn save(&self, encoded_key: &str, long_url: &str) -> Result<SaveOutcome, AppError> {
        let digest = long_url_digest(long_url);

        let inserted = with_deadline(
            self.query_timeout,
            sqlx::query_scalar::<_, String>(
                r#"
                INSERT INTO urls (encoded_key, long_url, long_url_hash)
                VALUES ($1, $2, $3)
                ON CONFLICT (long_url_hash) DO NOTHING
                RETURNING encoded_key
                "#,
            )
            .bind(encoded_key)
            .bind(long_url)
            .bind(digest.as_slice())
            .fetch_optional(self.pool.as_ref()),
        )
        .await;

        match inserted {
            Ok(Some(stored_key)) => {
                return Ok(SaveOutcome::Stored {
                    encoded_key: stored_key,
                });
            }
            Ok(None) => {}
            Err(StorageFailure::Database(e)) if is_unique_violation_on_key(&e) => {
                warn!("Encoded key {} already assigned to another URL", encoded_key);
                return Ok(SaveOutcome::KeyCollision);
            }
            Err(e) => return Err(unexpected("insert url", e)),
        }

        // The long URL was stored concurrently; its committed row is visible now.
        let existing = with_deadline(
            self.query_timeout,
            sqlx::query_scalar::<_, String>(
                "SELECT encoded_key FROM urls WHERE long_url_hash = $1 AND long_url = $2",
            )
            .bind(digest.as_slice())
            .bind(long_url)
            .fetch_optional(self.pool.as_ref()),
        )
        .await
        .map_err(|e| unexpected("find encoded key after conflict", e))?;

        match existing {
            Some(stored_key) => {
                debug!("Long URL already stored under {}", stored_key);
                Ok(SaveOutcome::Stored {
                    encoded_key: stored_key,
                })
            }
            None => {
                error!("Digest of {} matches a different stored URL", long_url);
                Err(AppError::unexpected("Database error", json!({})))
            }
        }
    }
}
