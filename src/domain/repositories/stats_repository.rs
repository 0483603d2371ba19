//! Repository trait for click statistics.

use crate::domain::entities::{ClickBatch, NewClickBatch};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Aggregated statistics for a single link.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub alias: String,
    pub url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

/// Repository interface for click tracking and statistics.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Records a batch of clicks for an alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a batch
    /// for an alias that no longer exists.
    async fn record_clicks(&self, batch: NewClickBatch) -> Result<ClickBatch, AppError>;

    /// Sums all recorded clicks for an alias. Unknown aliases have zero clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn total_clicks(&self, alias: &str) -> Result<i64, AppError>;
}
