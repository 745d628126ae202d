//! Handler for the media download endpoint.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::media::{DownloadParams, DownloadResponse, MediaInfo};
use crate::error::ApiError;
use crate::state::AppState;

/// Downloads a media resource into the artifact store.
///
/// # Endpoint
///
/// `GET /api/ytdl?url=<media-url>`
///
/// The longest-running endpoint in the service. The fetch client bounds the
/// whole transfer with the configured deadline, so this handler always
/// answers within that bound.
///
/// # Response
///
/// ```json
/// {
///   "message": "Video downloaded successfully",
///   "data": {
///     "file": "media-oVBeFslYGJg1.mp4",
///     "path": "/static/media-oVBeFslYGJg1.mp4",
///     "bytes": 1048576,
///     "sha256": "9f86d08..."
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when `url` is missing, empty or not a valid URL,
/// 500 Internal Server Error when the source rejects the transfer, and
/// 504 Gateway Timeout when the download exceeds its deadline.
pub async fn ytdl_handler(
    State(state): State<AppState>,
    Query(params): Query<DownloadParams>,
) -> Result<Json<DownloadResponse>, ApiError> {
    let url = match params.url.as_deref() {
        Some(u) if !u.is_empty() => u,
        _ => return Err(ApiError::validation("url is required")),
    };
    params.validate()?;

    let media = state.media.fetch(url).await?;

    Ok(Json(DownloadResponse {
        message: "Video downloaded successfully".to_string(),
        data: MediaInfo {
            file: media.file_name,
            path: media.public_path,
            bytes: media.bytes_written,
            sha256: media.sha256,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::domain::integrations::{
        FetchedMedia, IntegrationError, MockMediaFetcher, MockQrEncoder, MockUrlShortener,
    };
    use crate::infrastructure::ArtifactStore;

    fn test_state(media: MockMediaFetcher) -> (AppState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState {
            shortener: Arc::new(MockUrlShortener::new()),
            qr: Arc::new(MockQrEncoder::new()),
            media: Arc::new(media),
            artifacts: Arc::new(ArtifactStore::new(dir.path()).unwrap()),
        };
        (state, dir)
    }

    #[tokio::test]
    async fn test_missing_url_never_reaches_the_client() {
        let mut media = MockMediaFetcher::new();
        media.expect_fetch().times(0);

        let (state, _dir) = test_state(media);
        let result = ytdl_handler(State(state), Query(DownloadParams { url: None })).await;

        let err = result.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.to_string(), "url is required");
    }

    #[tokio::test]
    async fn test_syntactically_invalid_url_is_rejected() {
        let mut media = MockMediaFetcher::new();
        media.expect_fetch().times(0);

        let (state, _dir) = test_state(media);
        let result = ytdl_handler(
            State(state),
            Query(DownloadParams {
                url: Some("definitely not a url".to_string()),
            }),
        )
        .await;

        assert!(matches!(result.unwrap_err(), ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_success_reports_stored_media() {
        let mut media = MockMediaFetcher::new();
        media
            .expect_fetch()
            .withf(|url| url == "https://example.com/clip.mp4")
            .times(1)
            .returning(|_| {
                Ok(FetchedMedia {
                    file_name: "media-abc123def456.mp4".to_string(),
                    public_path: "/static/media-abc123def456.mp4".to_string(),
                    bytes_written: 2048,
                    sha256: "cafebabe".to_string(),
                })
            });

        let (state, _dir) = test_state(media);
        let result = ytdl_handler(
            State(state),
            Query(DownloadParams {
                url: Some("https://example.com/clip.mp4".to_string()),
            }),
        )
        .await;

        let Json(response) = result.unwrap();
        assert_eq!(response.message, "Video downloaded successfully");
        assert_eq!(response.data.file, "media-abc123def456.mp4");
        assert_eq!(response.data.path, "/static/media-abc123def456.mp4");
        assert_eq!(response.data.bytes, 2048);
        assert_eq!(response.data.sha256, "cafebabe");
    }

    #[tokio::test]
    async fn test_fetch_failure_maps_to_integration_error() {
        let mut media = MockMediaFetcher::new();
        media
            .expect_fetch()
            .times(1)
            .returning(|_| Err(IntegrationError::unavailable("media fetch", "HTTP 404")));

        let (state, _dir) = test_state(media);
        let result = ytdl_handler(
            State(state),
            Query(DownloadParams {
                url: Some("https://example.com/missing.mp4".to_string()),
            }),
        )
        .await;

        assert!(matches!(result.unwrap_err(), ApiError::Integration(_)));
    }

    #[tokio::test]
    async fn test_deadline_overrun_keeps_timeout_identity() {
        let mut media = MockMediaFetcher::new();
        media.expect_fetch().times(1).returning(|_| {
            Err(IntegrationError::timeout(
                "media fetch",
                Duration::from_secs(60),
            ))
        });

        let (state, _dir) = test_state(media);
        let result = ytdl_handler(
            State(state),
            Query(DownloadParams {
                url: Some("https://example.com/huge.mp4".to_string()),
            }),
        )
        .await;

        assert!(matches!(result.unwrap_err(), ApiError::Timeout(_)));
    }
}
