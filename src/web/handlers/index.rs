//! Index page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the shortening form.
///
/// Renders `templates/index.html`; the form itself is driven by `static/app.js`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct IndexTemplate {
    version: &'static str,
}

/// Renders the shortening form.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {
        version: env!("CARGO_PKG_VERSION"),
    }
}
