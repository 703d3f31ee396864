//! Liveness probe for an external dependency.

use crate::error::AppError;
use async_trait::async_trait;

/// A dependency whose availability is reported by the health endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DependencyProbe: Send + Sync {
    /// Key under which the dependency appears in the health report.
    fn name(&self) -> String;

    /// Checks that the dependency answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unexpected`] if the dependency is unreachable or
    /// does not answer before the deadline.
    async fn ping(&self) -> Result<(), AppError>;
}
