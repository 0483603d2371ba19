//! Submission controller driving the shorten, QR and stats calls.
//!
//! One submission is a linear chain: shorten, then fetch the QR code, then
//! look up stats. Every step awaits a cancellation token, and starting a new
//! submission cancels the previous token, so only the most recently started
//! chain ever writes to the view.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::form::ShortenForm;
use super::http::{ClientError, ShortenerClient, alias_from_short_url};
use super::view::ResultView;

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Completed {
        short_url: String,
        alias: String,
        /// `false` when the stats lookup answered with a non-success status.
        stats_shown: bool,
    },
    /// The chain failed and the user was alerted with `Error: <message>`.
    Failed { message: String },
    /// A newer submission started before this one finished.
    Superseded,
}

enum Interrupt {
    Superseded,
    Failed(ClientError),
}

impl From<ClientError> for Interrupt {
    fn from(e: ClientError) -> Self {
        Interrupt::Failed(e)
    }
}

/// Runs form submissions against a [`ShortenerClient`] and renders them on a
/// [`ResultView`].
pub struct SubmissionController<V: ResultView> {
    client: ShortenerClient,
    view: Arc<V>,
    current: Mutex<CancellationToken>,
}

impl<V: ResultView> SubmissionController<V> {
    pub fn new(client: ShortenerClient, view: Arc<V>) -> Self {
        Self {
            client,
            view,
            current: Mutex::new(CancellationToken::new()),
        }
    }

    pub fn view(&self) -> &Arc<V> {
        &self.view
    }

    /// Submits the form.
    ///
    /// Hides previous results, shortens the URL, shows the link and its QR
    /// code, then shows stats if the service has them. A non-success status
    /// on the QR or stats fetch is not an error: the result is shown without
    /// that part. Any other failure is alerted once.
    pub async fn submit(&self, form: &ShortenForm) -> SubmissionOutcome {
        let token = self.begin();

        match self.run(form, &token).await {
            Ok(outcome) => outcome,
            Err(Interrupt::Superseded) => {
                debug!("Submission superseded");
                SubmissionOutcome::Superseded
            }
            Err(Interrupt::Failed(e)) => {
                let message = e.to_string();
                let alerted = self.render(&token, |view| view.alert(&format!("Error: {message}")));

                match alerted {
                    Ok(()) => {
                        warn!("Submission failed: {}", message);
                        SubmissionOutcome::Failed { message }
                    }
                    Err(_) => SubmissionOutcome::Superseded,
                }
            }
        }
    }

    /// Cancels the in-flight submission, if any, and hides its results.
    fn begin(&self) -> CancellationToken {
        let mut current = self.lock_current();
        current.cancel();
        *current = CancellationToken::new();

        self.view.hide_result();
        self.view.hide_stats();

        current.clone()
    }

    async fn run(
        &self,
        form: &ShortenForm,
        token: &CancellationToken,
    ) -> Result<SubmissionOutcome, Interrupt> {
        let request = form.to_request();

        let response = guarded(token, self.client.shorten(&request)).await??;
        let short_url = response.short_url;
        self.render(token, |view| view.show_link(&short_url))?;

        let qr = match guarded(token, self.client.fetch_qr(&short_url)).await? {
            Ok(qr) => Some(qr),
            Err(ClientError::QrUnavailable(status)) => {
                warn!(%short_url, %status, "QR code unavailable, showing link without it");
                None
            }
            Err(e) => return Err(e.into()),
        };
        self.render(token, |view| {
            if let Some(qr) = &qr {
                view.show_qr(qr);
            }
            view.show_result();
        })?;

        let alias = alias_from_short_url(&short_url)?;
        let stats_shown = match guarded(token, self.client.stats(&alias)).await?? {
            Some(stats) => {
                let pretty = serde_json::to_string_pretty(&stats).unwrap_or_else(|_| stats.to_string());
                self.render(token, |view| view.show_stats(&pretty))?;
                true
            }
            None => false,
        };

        info!(%short_url, %alias, stats_shown, "Submission completed");
        Ok(SubmissionOutcome::Completed {
            short_url,
            alias,
            stats_shown,
        })
    }

    /// Applies `f` to the view unless `token` has been cancelled.
    ///
    /// Runs under the same lock as [`Self::begin`], so a newer submission
    /// cannot start between the check and the write.
    fn render(&self, token: &CancellationToken, f: impl FnOnce(&V)) -> Result<(), Interrupt> {
        let _current = self.lock_current();
        if token.is_cancelled() {
            return Err(Interrupt::Superseded);
        }

        f(&self.view);
        Ok(())
    }

    fn lock_current(&self) -> MutexGuard<'_, CancellationToken> {
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

async fn guarded<T>(
    token: &CancellationToken,
    fut: impl Future<Output = T>,
) -> Result<T, Interrupt> {
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(Interrupt::Superseded),
        out = fut => Ok(out),
    }
}
