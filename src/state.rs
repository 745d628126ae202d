use std::sync::Arc;

use crate::domain::integrations::{MediaFetcher, QrEncoder, UrlShortener};
use crate::infrastructure::ArtifactStore;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<dyn UrlShortener>,
    pub qr: Arc<dyn QrEncoder>,
    pub media: Arc<dyn MediaFetcher>,
    pub artifacts: Arc<ArtifactStore>,
}
