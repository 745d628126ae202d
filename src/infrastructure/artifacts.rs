//! Artifact storage with per-request unique naming.
//!
//! Generated QR codes and downloaded media land in one directory that is
//! served read-only under `/static`. The directory is the only shared
//! resource in the service, so every write goes to a fresh random file name;
//! two concurrent requests can never race on the same path.

use std::path::{Path, PathBuf};

use base64::Engine as _;
use tokio::fs;

use crate::domain::integrations::IntegrationError;

/// Length of random bytes before base64 encoding.
const ID_LENGTH_BYTES: usize = 9;

/// Generates a random URL-safe artifact id.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character id.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn artifact_id() -> String {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Reference to a stored artifact.
#[derive(Debug, Clone)]
pub struct StoredArtifact {
    /// File name inside the artifact directory.
    pub file_name: String,
    /// URL path under which the artifact is served.
    pub public_path: String,
}

/// Filesystem destination for generated and downloaded artifacts.
///
/// Callers either hand over finished bytes ([`ArtifactStore::store`]) or
/// reserve a unique path and stream into it themselves (the media fetcher
/// does the latter). File names follow `<prefix>-<id>.<extension>`; the
/// extension must already be sanitized by the caller.
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Creates the store, ensuring the root directory exists.
    pub fn new(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Produces a fresh unique file name for an artifact.
    pub fn unique_name(&self, prefix: &str, extension: &str) -> String {
        format!("{}-{}.{}", prefix, artifact_id(), extension)
    }

    /// Absolute path of an artifact inside the store.
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    /// URL path under which an artifact is served.
    pub fn public_path(&self, file_name: &str) -> String {
        format!("/static/{}", file_name)
    }

    /// Writes finished bytes under a fresh unique name.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationError::Unavailable`] when the write fails; the
    /// store is treated like any other capability backend at the handler
    /// boundary.
    pub async fn store(
        &self,
        prefix: &str,
        extension: &str,
        bytes: &[u8],
    ) -> Result<StoredArtifact, IntegrationError> {
        let file_name = self.unique_name(prefix, extension);
        let path = self.path_for(&file_name);

        fs::write(&path, bytes)
            .await
            .map_err(|e| IntegrationError::unavailable("artifact store", e.to_string()))?;

        tracing::debug!(file = %file_name, bytes = bytes.len(), "artifact stored");

        Ok(StoredArtifact {
            public_path: self.public_path(&file_name),
            file_name,
        })
    }

    /// Best-effort removal of an artifact (used for aborted downloads).
    ///
    /// A missing file is not an error: the transfer may have failed before
    /// anything was written.
    pub async fn discard(&self, file_name: &str) {
        let path = self.path_for(file_name);
        match fs::remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(file = %file_name, error = %e, "failed to remove partial artifact");
            }
        }
    }

    /// Whether the artifact directory is usable.
    ///
    /// Used by the health check endpoint.
    pub async fn health_check(&self) -> bool {
        fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }
}
