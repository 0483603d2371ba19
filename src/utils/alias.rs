//! Alias generation and validation utilities.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Length of generated aliases.
pub const GENERATED_ALIAS_LEN: usize = 7;

const MIN_CUSTOM_LEN: usize = 3;
const MAX_CUSTOM_LEN: usize = 32;

/// Aliases that would shadow service routes.
const RESERVED_ALIASES: &[&str] = &["shorten", "stats", "static", "health", "metrics"];

static ALIAS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Generates a random alphanumeric alias.
///
/// 62^7 possible values; collisions are handled by the caller retrying.
pub fn generate_alias() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_ALIAS_LEN)
        .map(char::from)
        .collect()
}

/// Validates a user-chosen alias.
///
/// # Rules
///
/// - Length: 3-32 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route name
///
/// Aliases never contain `/`, so the alias is always the last path segment
/// of a short URL.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_alias(alias: &str) -> Result<(), AppError> {
    let len = alias.chars().count();
    if !(MIN_CUSTOM_LEN..=MAX_CUSTOM_LEN).contains(&len) {
        return Err(AppError::bad_request(
            format!("alias must be {MIN_CUSTOM_LEN}-{MAX_CUSTOM_LEN} characters"),
            json!({ "provided_length": len }),
        ));
    }

    if !ALIAS_PATTERN.is_match(alias) {
        return Err(AppError::bad_request(
            "alias can only contain letters, digits, '-' and '_'",
            json!({ "alias": alias }),
        ));
    }

    if RESERVED_ALIASES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(alias))
    {
        return Err(AppError::bad_request(
            "alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}
