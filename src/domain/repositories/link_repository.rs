//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts the link unless its alias is already taken.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if the link was inserted
    /// - `Ok(None)` if a link with the same alias already exists
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_if_absent(&self, new_link: NewLink) -> Result<Option<Link>, AppError>;

    /// Finds a link by its alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_alias(&self, alias: &str) -> Result<Option<Link>, AppError>;

    /// Verifies that the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
