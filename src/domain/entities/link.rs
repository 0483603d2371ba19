//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A short alias mapped to its target URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub alias: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(alias: String, url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            alias,
            url,
            created_at,
        }
    }

    /// Returns true if this link already points at `url`.
    ///
    /// Used to make re-shortening the same URL under the same alias idempotent.
    pub fn targets(&self, url: &str) -> bool {
        self.url == url
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub alias: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            "abc1234".to_string(),
            "https://example.com/".to_string(),
            now,
        );

        assert_eq!(link.alias, "abc1234");
        assert_eq!(link.url, "https://example.com/");
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_link_targets() {
        let link = Link::new(
            "promo".to_string(),
            "https://example.com/a".to_string(),
            Utc::now(),
        );

        assert!(link.targets("https://example.com/a"));
        assert!(!link.targets("https://example.com/b"));
    }
}
