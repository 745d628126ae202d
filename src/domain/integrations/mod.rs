//! Integration client contracts.
//!
//! Each capability that leaves the process goes through one of the traits
//! defined here. Handlers depend on the traits only; concrete clients live in
//! [`crate::infrastructure`] and are injected through
//! [`crate::state::AppState`].
//!
//! # Contracts
//!
//! - [`UrlShortener`] - shorten a long URL via an external HTTP API
//! - [`QrEncoder`] - render text as a QR code image (local library call)
//! - [`MediaFetcher`] - download a media resource into the artifact store
//!
//! All three fail with [`IntegrationError`], which fixes the HTTP status
//! mapping at the handler boundary: timeouts become 504, everything else 500.
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` for unit tests;
//! integration tests in `tests/` use the real clients against local fake
//! upstreams.

pub mod error;
pub mod media;
pub mod qr;
pub mod shortener;

pub use error::IntegrationError;
pub use media::{FetchedMedia, MediaFetcher};
pub use qr::{QrEncoder, QrImage};
pub use shortener::UrlShortener;

#[cfg(test)]
pub use media::MockMediaFetcher;
#[cfg(test)]
pub use qr::MockQrEncoder;
#[cfg(test)]
pub use shortener::MockUrlShortener;
