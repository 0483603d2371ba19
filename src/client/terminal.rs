//! Terminal rendering for `rustify-cli`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use colored::Colorize;

use super::http::QrImage;
use super::view::ResultView;

/// Prints submission results to the terminal.
///
/// The QR code is written to `qr_path`, which is what the printed result
/// points at.
pub struct TerminalView {
    qr_path: PathBuf,
    saved_qr: Mutex<Option<PathBuf>>,
}

impl TerminalView {
    pub fn new(qr_path: impl Into<PathBuf>) -> Self {
        Self {
            qr_path: qr_path.into(),
            saved_qr: Mutex::new(None),
        }
    }

    /// Path of the last QR code written, if any.
    pub fn saved_qr(&self) -> Option<PathBuf> {
        self.saved_qr
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_saved_qr(&self, path: Option<&Path>) {
        *self
            .saved_qr
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = path.map(Path::to_path_buf);
    }
}

impl ResultView for TerminalView {
    fn hide_result(&self) {
        self.set_saved_qr(None);
    }

    fn hide_stats(&self) {}

    fn show_link(&self, short_url: &str) {
        println!("{} {}", "Short URL:".bold(), short_url.green().underline());
    }

    fn show_qr(&self, image: &QrImage) {
        match fs::write(&self.qr_path, &image.bytes) {
            Ok(()) => {
                println!(
                    "{} {} ({} bytes)",
                    "QR code:".bold(),
                    self.qr_path.display(),
                    image.bytes.len()
                );
                self.set_saved_qr(Some(&self.qr_path));
            }
            Err(e) => {
                tracing::warn!("Failed to write QR code to {}: {}", self.qr_path.display(), e);
                eprintln!(
                    "{} could not write {}: {}",
                    "warning:".yellow().bold(),
                    self.qr_path.display(),
                    e
                );
            }
        }
    }

    fn show_result(&self) {}

    fn show_stats(&self, pretty_json: &str) {
        println!("{}", "Stats:".bold());
        println!("{}", pretty_json.dimmed());
    }

    fn alert(&self, message: &str) {
        eprintln!("{}", message.red().bold());
    }
}
