//! Per-query deadline for storage calls.

use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Failure of a storage call run under a deadline.
#[derive(Debug, Error)]
pub enum StorageFailure {
    #[error("query exceeded deadline of {0:?}")]
    DeadlineExceeded(Duration),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Awaits `query`, abandoning it once `deadline` has elapsed.
///
/// Dropping the timed-out future cancels the in-flight query and returns its
/// connection to the pool.
pub async fn with_deadline<T, F>(deadline: Duration, query: F) -> Result<T, StorageFailure>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(deadline, query).await {
        Ok(result) => result.map_err(StorageFailure::from),
        Err(_) => Err(StorageFailure::DeadlineExceeded(deadline)),
    }
}
