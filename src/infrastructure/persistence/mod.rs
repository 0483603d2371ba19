//! PostgreSQL repository implementations.
//!
//! - [`PgLinkRepository`] - Alias mappings
//! - [`PgStatsRepository`] - Click batches and totals

pub mod pg_link_repository;
pub mod pg_stats_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_stats_repository::PgStatsRepository;
