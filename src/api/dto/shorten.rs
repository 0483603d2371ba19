//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// Shared by the service and the submission client. An absent alias is
/// serialized without an `alias` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten (must be a valid absolute URL).
    #[validate(url(message = "invalid URL format"), length(max = 2048))]
    pub url: String,

    /// Optional custom alias. Checked by the link service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// Response for a created (or already existing) short link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResponse {
    /// Assigned alias. Always set by the service; clients only rely on `short_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Absolute URL that redirects to the target.
    pub short_url: String,
}
