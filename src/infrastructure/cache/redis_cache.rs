//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

const KEY_PREFIX: &str = "alias:";

/// Redis cache for alias lookups on the redirect path.
///
/// The `ConnectionManager` reconnects on its own and is cheap to clone per
/// operation. Operation errors are returned as [`CacheError::Operation`];
/// callers fall back to the database.
pub struct RedisCache {
    conn: ConnectionManager,
    default_ttl: u64,
}

impl RedisCache {
    /// Connects to Redis and verifies the connection with a PING.
    ///
    /// `default_ttl_seconds` applies when [`CacheService::set_target`] is
    /// called without a TTL (`CACHE_TTL_SECONDS`).
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("invalid Redis URL: {e}")))?;

        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("failed to connect: {e}")))?;

        let mut probe = conn.clone();
        probe
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("PING failed: {e}")))?;

        info!("Connected to Redis");

        Ok(Self {
            conn,
            default_ttl: default_ttl_seconds,
        })
    }

    fn key(alias: &str) -> String {
        format!("{KEY_PREFIX}{alias}")
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_target(&self, alias: &str) -> CacheResult<Option<String>> {
        let mut conn = self.conn.clone();

        let hit = conn
            .get::<_, Option<String>>(Self::key(alias))
            .await
            .map_err(|e| CacheError::Operation(format!("GET {alias}: {e}")))?;

        debug!(alias, hit = hit.is_some(), "Cache lookup");
        Ok(hit)
    }

    async fn set_target(&self, alias: &str, url: &str, ttl_seconds: Option<u64>) -> CacheResult<()> {
        let mut conn = self.conn.clone();
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);

        conn.set_ex::<_, _, ()>(Self::key(alias), url, ttl)
            .await
            .map_err(|e| CacheError::Operation(format!("SET {alias}: {e}")))
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }
}
