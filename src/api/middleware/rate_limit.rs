//! Per-client rate limiting.

use std::sync::Arc;

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::GovernorLayer;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor};

/// Requests per second refilled into each client's bucket.
const PER_SECOND: u64 = 2;

/// Burst capacity before requests are rejected.
const BURST_SIZE: u32 = 100;

/// Governor layer keyed by extractor `K`.
pub type RateLimitLayer<K> = GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Token bucket limiter keyed by the socket peer address.
///
/// Each client starts with `BURST_SIZE` requests and refills at
/// `PER_SECOND`; beyond that the layer answers `429 Too Many Requests`.
pub fn layer() -> RateLimitLayer<PeerIpKeyExtractor> {
    let config = GovernorConfigBuilder::default()
        .per_second(PER_SECOND)
        .burst_size(BURST_SIZE)
        .finish()
        .unwrap();

    GovernorLayer::new(Arc::new(config))
}

/// Same limits as [`layer`], keyed by forwarded headers instead.
///
/// For deployments behind a trusted reverse proxy: the client identity comes
/// from `X-Forwarded-For` / `X-Real-IP`. Never enable this on a directly
/// exposed service; there the headers are client-controlled.
pub fn proxy_layer() -> RateLimitLayer<SmartIpKeyExtractor> {
    let config = GovernorConfigBuilder::default()
        .per_second(PER_SECOND)
        .burst_size(BURST_SIZE)
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .unwrap();

    GovernorLayer::new(Arc::new(config))
}
