//! PostgreSQL liveness probe.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::repositories::DependencyProbe;
use crate::error::AppError;
use crate::infrastructure::persistence::deadline::with_deadline;

/// Pings PostgreSQL with `SELECT 1`.
pub struct PgHealthProbe {
    pool: Arc<PgPool>,
    query_timeout: Duration,
}

impl PgHealthProbe {
    pub fn new(pool: Arc<PgPool>, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[async_trait]
impl DependencyProbe for PgHealthProbe {
    fn name(&self) -> String {
        "postgres".to_string()
    }

    async fn ping(&self) -> Result<(), AppError> {
        with_deadline(
            self.query_timeout,
            sqlx::query("SELECT 1").execute(self.pool.as_ref()),
        )
        .await
        .map(|_| ())
        .map_err(|e| {
            AppError::unexpected("Failed to ping postgres", json!({ "reason": e.to_string() }))
        })
    }
}
