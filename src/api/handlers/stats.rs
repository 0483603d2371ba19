//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves click statistics for an alias.
///
/// # Endpoint
///
/// `GET /stats/{alias}`
///
/// # Response
///
/// ```json
/// {
///   "alias": "docs",
///   "url": "https://example.com/docs",
///   "clicks": 42,
///   "created_at": "2025-01-01T12:00:00Z"
/// }
/// ```
///
/// Clicks still buffered by the click worker are not included yet.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.get_stats(&alias).await?;

    Ok(Json(stats.into()))
}
