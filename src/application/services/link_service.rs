//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::alias::{generate_alias, validate_custom_alias};
use crate::utils::target_url::parse_target_url;
use serde_json::json;

/// Attempts at finding a free generated alias before giving up.
const MAX_ALIAS_ATTEMPTS: usize = 10;

/// Service for creating and resolving short links.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the public origin short URLs are built from, e.g.
    /// `https://s.example.com`. A trailing slash is ignored.
    pub fn new(link_repository: Arc<dyn LinkRepository>, base_url: impl Into<String>) -> Self {
        Self {
            link_repository,
            base_url: base_url.into(),
        }
    }

    /// Shortens `url`, under `custom_alias` when given.
    ///
    /// # Alias allocation
    ///
    /// - A custom alias is validated and claimed. If it already maps to the
    ///   same URL the existing link is returned; if it maps elsewhere the
    ///   call fails with `alias taken`.
    /// - Otherwise a random 7-character alias is generated, retrying up to
    ///   10 times on collision.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an invalid URL or alias.
    /// Returns [`AppError::Conflict`] if the custom alias is taken.
    /// Returns [`AppError::Internal`] on database errors or exhausted retries.
    pub async fn shorten(&self, url: &str, custom_alias: Option<String>) -> Result<Link, AppError> {
        let target = parse_target_url(url).map_err(|e| {
            AppError::bad_request(e.to_string(), json!({ "url": url }))
        })?;

        let (link, created) = match custom_alias {
            Some(alias) => {
                validate_custom_alias(&alias)?;
                self.claim_custom(alias, target).await?
            }
            None => (self.claim_generated(target).await?, true),
        };

        if created {
            metrics::counter!("rustify_links_created_total").increment(1);
        }
        Ok(link)
    }

    /// Retrieves the link behind an alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown.
    pub async fn get_link(&self, alias: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_alias(alias)
            .await?
            .ok_or_else(|| AppError::not_found("not found", json!({ "alias": alias })))
    }

    /// Builds the absolute short URL for an alias.
    pub fn short_url(&self, alias: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), alias)
    }

    /// Checks that link storage is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }

    /// Claims `alias` for `target`. The flag is `false` when an existing
    /// link for the same target was returned instead of a new one.
    async fn claim_custom(&self, alias: String, target: String) -> Result<(Link, bool), AppError> {
        let new_link = NewLink {
            alias: alias.clone(),
            url: target.clone(),
        };

        if let Some(link) = self.link_repository.insert_if_absent(new_link).await? {
            return Ok((link, true));
        }

        match self.link_repository.find_by_alias(&alias).await? {
            Some(existing) if existing.targets(&target) => Ok((existing, false)),
            _ => Err(AppError::conflict(
                "alias taken",
                json!({ "alias": alias }),
            )),
        }
    }

    async fn claim_generated(&self, target: String) -> Result<Link, AppError> {
        for _ in 0..MAX_ALIAS_ATTEMPTS {
            let new_link = NewLink {
                alias: generate_alias(),
                url: target.clone(),
            };

            if let Some(link) = self.link_repository.insert_if_absent(new_link).await? {
                return Ok(link);
            }
        }

        Err(AppError::internal(
            "failed to generate a unique alias",
            json!({ "attempts": MAX_ALIAS_ATTEMPTS }),
        ))
    }
}
