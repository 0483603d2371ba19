//! Click batch entity: aggregated redirect counts.

use chrono::{DateTime, Utc};

/// A persisted batch of clicks for one alias.
///
/// The click worker does not store one row per redirect. It counts redirects
/// per alias during a flush window and writes one batch with the count.
#[derive(Debug, Clone)]
pub struct ClickBatch {
    pub alias: String,
    pub ts: DateTime<Utc>,
    pub n: i64,
}

/// Input data for recording a click batch. The timestamp is set by the database.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClickBatch {
    pub alias: String,
    pub n: i64,
}
