//! Infrastructure layer.
//!
//! Concrete adapters behind the domain integration traits: the TinyURL
//! client, the SVG QR encoder, the streaming media fetcher and the on-disk
//! artifact store they publish files through.

pub mod artifacts;
pub mod media;
pub mod qr;
pub mod tinyurl;

pub use artifacts::{ArtifactStore, StoredArtifact};
pub use media::HttpMediaFetcher;
pub use qr::SvgQrEncoder;
pub use tinyurl::TinyUrlClient;
