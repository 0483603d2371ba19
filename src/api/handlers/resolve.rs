//! Handler for short link resolution: redirect or QR code.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use tracing::{debug, error, warn};

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::qr;

/// Resolves an alias to its target.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Request Flow
///
/// 1. Check cache for the target URL
/// 2. On cache miss, query database and fill the cache asynchronously
/// 3. If `Accept` contains `image/png`, return a QR code of the short URL
/// 4. Otherwise send a click event to the background worker
/// 5. Return 307 Temporary Redirect
///
/// # Cache Strategy
///
/// - **Cache hit**: Immediate redirect
/// - **Cache miss**: Query DB, spawn async cache write
/// - **Cache error**: Log and fall back to DB
///
/// # Click Tracking
///
/// Click events are sent to a bounded channel for async processing.
/// If the queue is full, the click is dropped. QR requests are not counted.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn resolve_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let target = lookup_target(&state, &alias).await?;

    if wants_qr(&headers) {
        let short_url = state.link_service.short_url(&alias);
        let png = qr::render_png(&short_url).map_err(|e| {
            AppError::internal("failed to render QR code", json!({ "reason": e.to_string() }))
        })?;

        return Ok((
            [(header::CONTENT_TYPE, HeaderValue::from_static("image/png"))],
            png,
        )
            .into_response());
    }

    if let Err(e) = state.click_sender.try_send(ClickEvent::new(alias.as_str())) {
        metrics::counter!("rustify_clicks_dropped_total").increment(1);
        warn!("Dropped click for {}: {}", alias, e);
    }

    Ok(Redirect::temporary(&target).into_response())
}

async fn lookup_target(state: &AppState, alias: &str) -> Result<String, AppError> {
    match state.cache.get_target(alias).await {
        Ok(Some(url)) => {
            debug!("Cache HIT for {}", alias);
            Ok(url)
        }
        Ok(None) => {
            debug!("Cache MISS for {}", alias);

            let link = state.link_service.get_link(alias).await?;

            let cache = state.cache.clone();
            let url = link.url.clone();
            tokio::spawn(async move {
                if let Err(e) = cache.set_target(&link.alias, &url, None).await {
                    error!("Failed to cache target: {}", e);
                }
            });

            Ok(link.url)
        }
        Err(e) => {
            error!("Cache error: {}", e);

            // Fall back to database on cache error
            Ok(state.link_service.get_link(alias).await?.url)
        }
    }
}

/// Whether any media range in `Accept` is exactly `image/png`.
fn wants_qr(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .filter_map(|range| range.split(';').next())
        .any(|media| media.trim().eq_ignore_ascii_case("image/png"))
}
