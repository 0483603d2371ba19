//! Client side of the shortener: the form submission flow.
//!
//! - [`form`] - Raw form input and request building
//! - [`http`] - Typed HTTP client for `/shorten`, QR and `/stats/{alias}`
//! - [`view`] - [`ResultView`] seam the controller renders to
//! - [`controller`] - [`SubmissionController`], last-submitted-wins
//! - [`terminal`] - [`TerminalView`] used by `rustify-cli`
//!
//! ```rust,ignore
//! let client = ShortenerClient::new("http://localhost:8080")?;
//! let controller = SubmissionController::new(client, Arc::new(TerminalView::new("qr.png")));
//! controller.submit(&ShortenForm::new("https://example.com").with_alias("ex")).await;
//! ```

pub mod controller;
pub mod form;
pub mod http;
pub mod terminal;
pub mod view;

pub use controller::{SubmissionController, SubmissionOutcome};
pub use form::ShortenForm;
pub use http::{ClientError, QrImage, ShortenerClient, alias_from_short_url};
pub use terminal::TerminalView;
pub use view::ResultView;
