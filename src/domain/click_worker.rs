//! Background worker that aggregates click events and flushes them in batches.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, error, info};

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::NewClickBatch;
use crate::domain::repositories::StatsRepository;
use crate::error::AppError;

/// Retries after the first failed write of a batch.
const FLUSH_RETRIES: usize = 3;

/// Consumes click events until the channel closes.
///
/// Events are counted per alias in memory. On every tick of `flush_interval`
/// the counts are drained and written as one batch per alias. When every
/// sender is dropped the remaining counts are flushed before returning, so a
/// graceful shutdown does not lose buffered clicks.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    stats_repository: Arc<dyn StatsRepository>,
    flush_interval: Duration,
) {
    let mut counts: HashMap<String, i64> = HashMap::new();
    let mut tick = tokio::time::interval(flush_interval);
    tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = tick.tick() => {
                flush(&mut counts, stats_repository.as_ref()).await;
            }
            event = rx.recv() => match event {
                Some(event) => *counts.entry(event.alias).or_default() += 1,
                None => break,
            }
        }
    }

    flush(&mut counts, stats_repository.as_ref()).await;
    info!("Click worker stopped");
}

async fn flush(counts: &mut HashMap<String, i64>, repository: &dyn StatsRepository) {
    if counts.is_empty() {
        return;
    }

    let pending: Vec<(String, i64)> = counts.drain().collect();
    debug!("Flushing clicks for {} aliases", pending.len());

    for (alias, n) in pending {
        if let Err(e) = write_batch(repository, &alias, n).await {
            metrics::counter!("rustify_click_flush_failures_total").increment(1);
            error!(alias = %alias, clicks = n, "Dropping click batch: {}", e);
        }
    }
}

/// Writes one batch, retrying transient failures with jittered backoff.
async fn write_batch(repository: &dyn StatsRepository, alias: &str, n: i64) -> Result<(), AppError> {
    let strategy = ExponentialBackoff::from_millis(10)
        .max_delay(Duration::from_secs(1))
        .map(jitter)
        .take(FLUSH_RETRIES);

    Retry::spawn(strategy, || {
        repository.record_clicks(NewClickBatch {
            alias: alias.to_string(),
            n,
        })
    })
    .await
    .map(|_| ())
}
