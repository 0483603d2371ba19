//! Parsing of redirect targets.

use url::Url;

/// Errors that can occur while parsing a redirect target.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("invalid URL: {0}")]
    InvalidFormat(String),

    #[error("only http and https URLs can be shortened")]
    UnsupportedProtocol,
}

/// Parses a redirect target into its canonical serialization.
///
/// The `url` crate lowercases the host and drops default ports. Path, query
/// and fragment are kept as given, since a fragment may carry client-side
/// routing state that the redirect must preserve.
///
/// Rejects non-HTTP(S) schemes such as `javascript:`, `data:` and `file:`.
pub fn parse_target_url(input: &str) -> Result<String, TargetUrlError> {
    let url = Url::parse(input.trim()).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(TargetUrlError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(TargetUrlError::InvalidFormat("missing host".to_string()));
    }

    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_https() {
        assert_eq!(
            parse_target_url("https://example.com").unwrap(),
            "https://example.com/"
        );
    }

    #[test]
    fn test_parse_lowercases_host_and_drops_default_port() {
        assert_eq!(
            parse_target_url("HTTPS://EXAMPLE.COM:443/Path?q=1").unwrap(),
            "https://example.com/Path?q=1"
        );
    }

    #[test]
    fn test_parse_keeps_custom_port_and_fragment() {
        assert_eq!(
            parse_target_url("http://localhost:3000/app#/settings").unwrap(),
            "http://localhost:3000/app#/settings"
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            parse_target_url("  https://example.com/a  ").unwrap(),
            "https://example.com/a"
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_target_url("not a url"),
            Err(TargetUrlError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_target_url(""),
            Err(TargetUrlError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_rejects_other_schemes() {
        for input in [
            "javascript:alert(1)",
            "data:text/plain,hi",
            "ftp://example.com/file",
            "file:///etc/passwd",
            "mailto:someone@example.com",
        ] {
            assert!(
                matches!(
                    parse_target_url(input),
                    Err(TargetUrlError::UnsupportedProtocol)
                ),
                "{input}"
            );
        }
    }
}
