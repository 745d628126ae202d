//! QR code rendering via the `qrcode` crate.

use qrcode::QrCode;
use qrcode::render::svg;

use crate::domain::integrations::{IntegrationError, QrEncoder, QrImage};

/// Rendered image edge length lower bound, in pixels.
const MIN_DIMENSIONS: u32 = 256;

/// SVG renderer for QR codes.
///
/// Produces the image as bytes and leaves persistence to the caller, so the
/// encoder itself holds no filesystem state. SVG keeps the artifact small
/// and scales without a raster pipeline.
pub struct SvgQrEncoder;

impl SvgQrEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SvgQrEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl QrEncoder for SvgQrEncoder {
    fn encode(&self, text: &str) -> Result<QrImage, IntegrationError> {
        let code = QrCode::new(text.as_bytes()).map_err(|e| {
            tracing::warn!(error = %e, "qr encoder rejected input");
            IntegrationError::encoding(e.to_string())
        })?;

        let rendered = code
            .render::<svg::Color>()
            .min_dimensions(MIN_DIMENSIONS, MIN_DIMENSIONS)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build();

        Ok(QrImage::new(rendered.into_bytes(), "svg"))
    }
}
