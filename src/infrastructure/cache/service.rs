//! Cache service trait and error types.

use async_trait::async_trait;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache connection error: {0}")]
    Connection(String),
    #[error("cache operation error: {0}")]
    Operation(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache of alias to target URL mappings in front of the database.
///
/// Callers treat the cache as fail-open: an error from a lookup degrades to
/// a database query and never fails a request.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Looks up the target URL for an alias.
    ///
    /// Returns `Ok(None)` on a miss and an error when the backend could not
    /// answer.
    async fn get_target(&self, alias: &str) -> CacheResult<Option<String>>;

    /// Stores an alias mapping, using the implementation's default TTL when
    /// `ttl_seconds` is `None`.
    async fn set_target(&self, alias: &str, url: &str, ttl_seconds: Option<u64>) -> CacheResult<()>;

    /// Reports whether the cache backend is reachable.
    async fn health_check(&self) -> bool;
}
