//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`               - Shortening form (web)
//! - `POST /shorten`        - Create a short link
//! - `GET  /stats/{alias}`  - Click statistics
//! - `GET  /{alias}`        - Redirect or QR code
//! - `GET  /health`         - Health check: DB, cache, click queue
//! - `/static/*`            - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, method and header
//! - **Limits** - Request body size and request timeout
//! - **Rate limiting** - Per-IP token bucket on the API routes
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;

/// HTTP limits applied around every route.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub request_timeout: Duration,
    pub body_limit_bytes: usize,
    /// `(per_second, burst)` for the API rate limiter; `None` disables it.
    pub rate_limit: Option<(u64, u32)>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            body_limit_bytes: 1024 * 1024,
            rate_limit: None,
        }
    }
}

impl From<&Config> for RouterOptions {
    fn from(config: &Config) -> Self {
        Self {
            request_timeout: config.request_timeout(),
            body_limit_bytes: config.body_limit_bytes,
            rate_limit: Some((config.rate_limit_per_second, config.rate_limit_burst)),
        }
    }
}

/// Constructs the application router with all routes and middleware.
///
/// With rate limiting enabled the router must be served with connect info
/// (`into_make_service_with_connect_info::<SocketAddr>()`) so the limiter
/// can fall back to the peer address.
pub fn app_router(state: AppState, options: &RouterOptions) -> NormalizePath<Router> {
    let mut api_router = api::routes::public_routes();
    if let Some((per_second, burst)) = options.rate_limit {
        api_router = api_router.layer(rate_limit::layer(per_second, burst));
    }

    let router = Router::new()
        .merge(web::routes::public_routes())
        .merge(api_router)
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(options.body_limit_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            options.request_timeout,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
