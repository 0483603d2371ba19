//! Web layer for the browser UI.
//!
//! Serves the shortening form rendered with Askama. The page talks to the
//! API through `static/app.js`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
