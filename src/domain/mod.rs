//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click tracking event model
//! - [`click_worker`] - Asynchronous click aggregation worker
//!
//! # Click Processing Flow
//!
//! 1. The redirect handler sends a [`click_event::ClickEvent`] to a bounded channel
//! 2. [`click_worker::run_click_worker`] counts events per alias
//! 3. Counts are flushed periodically as batches via [`repositories::StatsRepository`]

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
