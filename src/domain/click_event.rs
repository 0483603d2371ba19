//! Click event model for asynchronous click tracking.

/// A redirect that should be counted for an alias.
///
/// Sent from the redirect handler to the background worker over a bounded
/// channel, so the redirect response never waits on a database write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub alias: String,
}

impl ClickEvent {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
        }
    }
}
