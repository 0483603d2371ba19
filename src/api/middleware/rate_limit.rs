//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Rate limiter keyed by client IP.
pub type RateLimitLayer =
    GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a per-IP rate limiter for the API endpoints.
///
/// Each client IP refills `per_second` tokens per second up to `burst`.
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// The client IP is taken from `X-Forwarded-For`, `X-Real-IP` or `Forwarded`
/// when present, otherwise from the socket peer address. The router must be
/// served with `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/shorten", post(shorten_handler))
///     .layer(rate_limit::layer(1, 60));
/// ```
pub fn layer(per_second: u64, burst: u32) -> RateLimitLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second.max(1))
            .burst_size(burst.max(1))
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .expect("non-zero rate limit parameters are always accepted"),
    );

    GovernorLayer::new(governor_conf)
}
