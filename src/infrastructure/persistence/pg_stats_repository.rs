//! PostgreSQL implementation of statistics repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ClickBatch, NewClickBatch};
use crate::domain::repositories::StatsRepository;
use crate::error::AppError;

/// PostgreSQL repository for click batches.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ClickBatchRow {
    alias: String,
    ts: DateTime<Utc>,
    n: i64,
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn record_clicks(&self, batch: NewClickBatch) -> Result<ClickBatch, AppError> {
        let row = sqlx::query_as::<_, ClickBatchRow>(
            r#"
            INSERT INTO clicks (alias, ts, n)
            VALUES ($1, now(), $2)
            RETURNING alias, ts, n
            "#,
        )
        .bind(&batch.alias)
        .bind(batch.n)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(ClickBatch {
            alias: row.alias,
            ts: row.ts,
            n: row.n,
        })
    }

    async fn total_clicks(&self, alias: &str) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(n), 0)::BIGINT FROM clicks WHERE alias = $1",
        )
        .bind(alias)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(total)
    }
}
