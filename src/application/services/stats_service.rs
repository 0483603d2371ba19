//! Click statistics service.

use std::sync::Arc;

use crate::domain::repositories::{LinkRepository, LinkStats, StatsRepository};
use crate::error::AppError;
use serde_json::json;

/// Service assembling per-link statistics from link and click storage.
pub struct StatsService {
    link_repository: Arc<dyn LinkRepository>,
    stats_repository: Arc<dyn StatsRepository>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        stats_repository: Arc<dyn StatsRepository>,
    ) -> Self {
        Self {
            link_repository,
            stats_repository,
        }
    }

    /// Retrieves the statistics for an alias.
    ///
    /// Clicks still buffered in the click worker are not included until the
    /// next flush.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_stats(&self, alias: &str) -> Result<LinkStats, AppError> {
        let link = self
            .link_repository
            .find_by_alias(alias)
            .await?
            .ok_or_else(|| AppError::not_found("not found", json!({ "alias": alias })))?;

        let clicks = self.stats_repository.total_clicks(&link.alias).await?;

        Ok(LinkStats {
            alias: link.alias,
            url: link.url,
            clicks,
            created_at: link.created_at,
        })
    }
}
