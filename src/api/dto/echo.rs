//! DTOs for the echo endpoints.

use serde::Serialize;

/// Response for the GET probe endpoint.
#[derive(Debug, Serialize)]
pub struct GetEchoResponse {
    pub message: String,
}

/// Response echoing a posted JSON body back to the caller.
#[derive(Debug, Serialize)]
pub struct PostEchoResponse {
    pub message: String,
    pub data: serde_json::Value,
}
