//! Typed HTTP client for the shortener endpoints.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{StatusCode, redirect};
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};

/// Errors raised while talking to the shortener.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service answered with a non-success status; `message` is the body.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// Network failure or a body that could not be decoded.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("invalid server URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid short URL: {0}")]
    InvalidShortUrl(String),

    #[error("QR code unavailable ({0})")]
    QrUnavailable(StatusCode),
}

/// PNG bytes returned for a short URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImage {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// Client for `POST /shorten`, the QR fetch and `GET /stats/{alias}`.
#[derive(Debug, Clone)]
pub struct ShortenerClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ShortenerClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// Redirects are not followed, so fetching a short URL never reaches the
    /// link target.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] unless `base_url` is an
    /// absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("rustify/", env!("CARGO_PKG_VERSION")))
            .redirect(redirect::Policy::none())
            .build()?;

        Self::with_http_client(base_url, http)
    }

    /// Creates a client on top of a preconfigured `reqwest::Client`.
    pub fn with_http_client(base_url: &str, http: reqwest::Client) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self { http, base_url })
    }

    /// Posts `request` to `/shorten`.
    ///
    /// # Errors
    ///
    /// A non-success status yields [`ClientError::Rejected`] carrying the
    /// response body as the message.
    pub async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, ClientError> {
        let response = self
            .http
            .post(self.endpoint(&["shorten"])?)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            let message = if body.trim().is_empty() {
                status.to_string()
            } else {
                body
            };
            return Err(ClientError::Rejected { status, message });
        }

        Ok(response.json().await?)
    }

    /// Fetches the QR code for `short_url` by requesting it as `image/png`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::QrUnavailable`] on a non-success status, which
    /// callers may treat as "no image" rather than a failed submission.
    pub async fn fetch_qr(&self, short_url: &str) -> Result<QrImage, ClientError> {
        let url =
            Url::parse(short_url).map_err(|e| ClientError::InvalidShortUrl(format!("{short_url}: {e}")))?;

        let response = self.http.get(url).header(ACCEPT, "image/png").send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::QrUnavailable(status));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        Ok(QrImage {
            bytes: response.bytes().await?.to_vec(),
            content_type,
        })
    }

    /// Fetches `/stats/{alias}` as an opaque JSON document.
    ///
    /// Returns `Ok(None)` for any non-success status.
    pub async fn stats(&self, alias: &str) -> Result<Option<Value>, ClientError> {
        let response = self
            .http
            .get(self.endpoint(&["stats", alias])?)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!(alias, status = %response.status(), "No stats available");
            return Ok(None);
        }

        Ok(Some(response.json().await?))
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Extracts the alias from a short URL: its last non-empty path segment.
///
/// This is not the verbatim path minus its leading slash. A trailing slash
/// is ignored (`/abc/` gives `abc`) and a multi-segment path yields only
/// its final segment (`/r/xyz9` gives `xyz9`), so short URLs served under a
/// prefix still map to the alias the stats endpoint knows.
///
/// # Errors
///
/// Returns [`ClientError::InvalidShortUrl`] if `short_url` does not parse or
/// has an empty path.
pub fn alias_from_short_url(short_url: &str) -> Result<String, ClientError> {
    let url =
        Url::parse(short_url).map_err(|e| ClientError::InvalidShortUrl(format!("{short_url}: {e}")))?;

    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(String::from)
        .ok_or_else(|| ClientError::InvalidShortUrl(short_url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_from_short_url() {
        assert_eq!(alias_from_short_url("http://x/abc").unwrap(), "abc");
        assert_eq!(alias_from_short_url("https://host/r/xyz9").unwrap(), "xyz9");
        assert_eq!(alias_from_short_url("https://host/abc/").unwrap(), "abc");
        assert_eq!(
            alias_from_short_url("https://host:8443/docs?utm=1#top").unwrap(),
            "docs"
        );
    }

    #[test]
    fn test_alias_from_short_url_rejects_empty_path() {
        assert!(matches!(
            alias_from_short_url("https://host/"),
            Err(ClientError::InvalidShortUrl(_))
        ));
        assert!(matches!(
            alias_from_short_url("not a url"),
            Err(ClientError::InvalidShortUrl(_))
        ));
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = ShortenerClient::new("http://localhost:8080").unwrap();
        assert_eq!(
            client.endpoint(&["shorten"]).unwrap().as_str(),
            "http://localhost:8080/shorten"
        );

        let client = ShortenerClient::new("https://s.example.com/api/").unwrap();
        assert_eq!(
            client.endpoint(&["stats", "abc"]).unwrap().as_str(),
            "https://s.example.com/api/stats/abc"
        );
    }

    #[test]
    fn test_new_rejects_non_http_base() {
        assert!(matches!(
            ShortenerClient::new("ftp://example.com"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            ShortenerClient::new("localhost:8080"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_rejected_displays_body() {
        let err = ClientError::Rejected {
            status: StatusCode::CONFLICT,
            message: "alias taken".to_string(),
        };
        assert_eq!(err.to_string(), "alias taken");
    }
}
