//! Error types for the lease review server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use document_text::ExtractionError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Contract text too short: {found} characters, need at least {required}")]
    InsufficientText { found: usize, required: usize },

    #[error("Unsupported document: {0}")]
    UnsupportedFormat(String),

    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ServerError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg.clone())
            }
            ServerError::InsufficientText { found, required } => (
                StatusCode::BAD_REQUEST,
                "INSUFFICIENT_TEXT",
                format!(
                    "Could not extract enough text from the document ({} characters, need at least {}). Please ensure it is a valid rental contract.",
                    found, required
                ),
            ),
            ServerError::UnsupportedFormat(name) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FORMAT",
                format!("Unsupported file '{}'. Please upload a PDF or TXT file.", name),
            ),
            ServerError::ExtractionFailed(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EXTRACTION_FAILED",
                msg.clone(),
            ),
        };

        let body = ErrorResponse {
            success: false,
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ExtractionError> for ServerError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::UnsupportedFormat(name) => ServerError::UnsupportedFormat(name),
            ExtractionError::InsufficientText { found, required } => {
                ServerError::InsufficientText { found, required }
            }
            other => ServerError::ExtractionFailed(other.to_string()),
        }
    }
}
