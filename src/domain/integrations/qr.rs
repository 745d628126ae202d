//! Client contract for QR code generation.

use super::error::IntegrationError;

/// A rendered QR code image.
///
/// Carries the raw bytes plus the file extension the artifact store should
/// use when persisting them. Returning bytes instead of writing to a fixed
/// path keeps the encoder free of shared filesystem state, so concurrent
/// requests cannot clobber each other's output.
#[derive(Debug, Clone)]
pub struct QrImage {
    pub bytes: Vec<u8>,
    pub extension: &'static str,
}

impl QrImage {
    pub fn new(bytes: Vec<u8>, extension: &'static str) -> Self {
        Self { bytes, extension }
    }
}

/// Encoder turning arbitrary text into a QR code image.
///
/// This is a local library call rather than a network integration, so the
/// contract is synchronous. It still reports failures through
/// [`IntegrationError`] like the other clients: the handler boundary treats
/// all capability backends uniformly.
///
/// # Implementations
///
/// - [`crate::infrastructure::SvgQrEncoder`] - SVG renderer via the `qrcode` crate
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait QrEncoder: Send + Sync {
    /// Encodes `text` into a QR code image.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationError::Encoding`] when the underlying encoder
    /// rejects the input (in practice: text exceeding QR symbol capacity).
    fn encode(&self, text: &str) -> Result<QrImage, IntegrationError>;
}
