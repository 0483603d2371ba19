//! Core domain entities.
//!
//! - [`Link`] - A short alias mapped to a target URL
//! - [`ClickBatch`] - Aggregated clicks for an alias over one flush window
//!
//! Entities have separate input structs for creation (`NewLink`, `NewClickBatch`).

pub mod click;
pub mod link;

pub use click::{ClickBatch, NewClickBatch};
pub use link::{Link, NewLink};
