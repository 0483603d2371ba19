//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use tracing::{info, warn};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/docs", "alias": "docs" }
/// ```
///
/// `alias` is optional; a blank alias is treated as absent.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "alias": "docs", "short_url": "https://s.example.com/docs" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid URL or alias.
/// Returns 409 Conflict (`alias taken`) if the alias maps to another URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let custom_alias = payload
        .alias
        .map(|alias| alias.trim().to_string())
        .filter(|alias| !alias.is_empty());

    let link = state
        .link_service
        .shorten(&payload.url, custom_alias)
        .await?;

    if let Err(e) = state
        .cache
        .set_target(&link.alias, &link.url, None)
        .await
    {
        warn!("Failed to cache new link {}: {}", link.alias, e);
    }

    let short_url = state.link_service.short_url(&link.alias);
    info!(alias = %link.alias, "Short link ready");

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            alias: Some(link.alias),
            short_url,
        }),
    ))
}
