//! Helpers shared by the service layers.
//!
//! - [`alias`] - Alias generation and validation
//! - [`target_url`] - Redirect target parsing
//! - [`qr`] - QR code PNG rendering

pub mod alias;
pub mod qr;
pub mod target_url;
