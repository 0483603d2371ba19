//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls, validation and business rules, and
//! give HTTP handlers a small API.
//!
//! - [`services::link_service::LinkService`] - Alias allocation and resolution
//! - [`services::stats_service::StatsService`] - Per-link click statistics

pub mod services;
