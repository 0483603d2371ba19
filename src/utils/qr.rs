//! QR code rendering.

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;

/// Minimum edge length of the rendered image in pixels.
const MIN_DIMENSION: u32 = 256;

#[derive(Debug, thiserror::Error)]
pub enum QrError {
    #[error("failed to encode QR code: {0}")]
    Encode(String),

    #[error("failed to write PNG: {0}")]
    Image(#[from] image::ImageError),
}

/// Renders `data` as a grayscale QR code PNG.
pub fn render_png(data: &str) -> Result<Vec<u8>, QrError> {
    let code = QrCode::new(data.as_bytes()).map_err(|e| QrError::Encode(e.to_string()))?;

    let img = code
        .render::<Luma<u8>>()
        .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
        .build();

    let mut buf = Vec::new();
    DynamicImage::ImageLuma8(img).write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_render_png_produces_png() {
        let png = render_png("http://localhost:8080/abc1234").unwrap();
        assert!(png.starts_with(PNG_MAGIC));
    }

    #[test]
    fn test_render_png_respects_min_dimensions() {
        let png = render_png("https://example.com/x").unwrap();
        let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png).unwrap();
        assert!(decoded.width() >= MIN_DIMENSION);
        assert_eq!(decoded.width(), decoded.height());
    }

    #[test]
    fn test_render_png_rejects_oversized_payload() {
        let payload = "x".repeat(8000);
        assert!(matches!(render_png(&payload), Err(QrError::Encode(_))));
    }
}
