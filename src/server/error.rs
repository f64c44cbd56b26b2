use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::error::ComboError;

/// Errors surfaced to HTTP clients as `{ "error": message }`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No file uploaded")]
    NoFile,

    #[error("CSV must contain at least one of each: main, side, drink")]
    IncompleteMenu,

    #[error("Uploaded file could not be read as UTF-8 CSV")]
    UnreadableUpload,

    #[error("{}", .0.body_text())]
    Multipart(#[from] MultipartError),

    #[error("Internal server error")]
    Internal(ComboError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoFile | ApiError::IncompleteMenu | ApiError::UnreadableUpload => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Multipart(err) => err.status(),
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ComboError> for ApiError {
    fn from(err: ComboError) -> Self {
        match err {
            ComboError::IncompleteMenu => ApiError::IncompleteMenu,
            ComboError::Csv(_) => ApiError::UnreadableUpload,
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(source) = &self {
            error!(error = %source, "request failed");
        }
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
