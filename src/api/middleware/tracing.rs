//! Request span and latency logging.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Trace layer applied to the whole route tree.
pub type HttpTraceLayer = TraceLayer<SharedClassifier<ServerErrorsAsFailures>>;

/// Builds the request tracing layer.
///
/// Opens an `INFO` span per request carrying method, URI and HTTP version,
/// and logs the response status with millisecond latency when the span
/// closes. Responses the classifier counts as failures (5xx) log at `WARN`,
/// so integration failures stand out without a separate filter.
///
/// ```text
/// INFO request{method=GET uri=/api/qrcode?text=hi version=HTTP/1.1}: finished processing request latency=3 ms status=200
/// ```
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(DefaultOnFailure::new().level(Level::WARN))
}
