//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod health;
pub mod resolve;
pub mod shorten;
pub mod stats;

pub use health::health_handler;
pub use resolve::resolve_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
