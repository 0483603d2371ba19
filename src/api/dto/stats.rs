//! DTOs for the statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::repositories::LinkStats;

/// Click statistics for a single alias.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub alias: String,
    pub url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl From<LinkStats> for StatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            alias: stats.alias,
            url: stats.url,
            clicks: stats.clicks,
            created_at: stats.created_at,
        }
    }
}
