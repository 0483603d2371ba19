//! Shortening form input.

use crate::api::dto::shorten::ShortenRequest;

/// Raw values of the shortening form, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortenForm {
    pub url: String,
    pub alias: String,
}

impl ShortenForm {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alias: String::new(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Builds the request body. The alias is trimmed and left out when blank;
    /// the URL is sent as typed.
    pub fn to_request(&self) -> ShortenRequest {
        let alias = self.alias.trim();

        ShortenRequest {
            url: self.url.clone(),
            alias: (!alias.is_empty()).then(|| alias.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_alias_is_omitted() {
        assert_eq!(ShortenForm::new("https://example.com").to_request().alias, None);
        assert_eq!(
            ShortenForm::new("https://example.com")
                .with_alias("   ")
                .to_request()
                .alias,
            None
        );
    }

    #[test]
    fn test_alias_is_trimmed() {
        let request = ShortenForm::new("https://example.com")
            .with_alias("  docs \t")
            .to_request();

        assert_eq!(request.alias.as_deref(), Some("docs"));
        assert_eq!(request.url, "https://example.com");
    }

    #[test]
    fn test_url_is_passed_through() {
        let request = ShortenForm::new(" https://example.com/a b ").to_request();
        assert_eq!(request.url, " https://example.com/a b ");
    }
}
