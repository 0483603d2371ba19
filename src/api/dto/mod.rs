//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization. Request bodies are checked
//! with validator before they reach the services.

pub mod health;
pub mod shorten;
pub mod stats;
