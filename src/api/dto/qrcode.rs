//! DTOs for the QR code endpoint.

use serde::{Deserialize, Serialize};

/// Query parameters for QR code generation.
#[derive(Debug, Deserialize)]
pub struct QrParams {
    pub text: Option<String>,
}

/// Response referencing the generated QR artifact.
#[derive(Debug, Serialize)]
pub struct QrResponse {
    pub message: String,
    pub qr_code_path: String,
}
