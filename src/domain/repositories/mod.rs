//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! - [`LinkRepository`] - Alias to URL mappings
//! - [`StatsRepository`] - Click batches and totals

pub mod link_repository;
pub mod stats_repository;

pub use link_repository::LinkRepository;
pub use stats_repository::{LinkStats, StatsRepository};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use stats_repository::MockStatsRepository;
