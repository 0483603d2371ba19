//! API route configuration.

use crate::api::handlers::{resolve_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes.
///
/// # Endpoints
///
/// - `POST /shorten`        - Create a short link
/// - `GET  /stats/{alias}`  - Click statistics for an alias
/// - `GET  /{alias}`        - Redirect, or QR code with `Accept: image/png`
///
/// Rate limiting is applied by the caller, see [`crate::routes::app_router`].
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{alias}", get(stats_handler))
        .route("/{alias}", get(resolve_handler))
}
