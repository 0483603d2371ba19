//! Presentation seam for submission results.

use super::http::QrImage;

/// Surface the submission controller writes results to.
///
/// Methods take `&self`; implementations shared across concurrent
/// submissions use interior mutability.
pub trait ResultView: Send + Sync {
    fn hide_result(&self);

    fn hide_stats(&self);

    /// Sets the visible link's text and target.
    fn show_link(&self, short_url: &str);

    /// Binds the QR image to a locally addressable reference.
    fn show_qr(&self, image: &QrImage);

    fn show_result(&self);

    /// Renders the pretty-printed stats document and reveals the stats panel.
    fn show_stats(&self, pretty_json: &str);

    /// Reports a failed submission to the user.
    fn alert(&self, message: &str);
}
