//! API error type with IntoResponse
//!
//! A failed fetch is always a 500. The body shape follows the route: the JSON
//! API answers `{"error": "<message>"}`, the HTML viewer answers plain text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bmsview_core::DataAccessError;
use serde_json::json;

/// How the error body is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorFormat {
    Json,
    PlainText,
}

#[derive(Debug)]
pub struct ApiError {
    error: DataAccessError,
    format: ErrorFormat,
}

impl ApiError {
    pub fn json(error: DataAccessError) -> Self {
        Self {
            error,
            format: ErrorFormat::Json,
        }
    }

    pub fn plain_text(error: DataAccessError) -> Self {
        Self {
            error,
            format: ErrorFormat::PlainText,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.error, "data access error");

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        match self.format {
            ErrorFormat::Json => {
                (status, Json(json!({ "error": self.error.to_string() }))).into_response()
            }
            ErrorFormat::PlainText => {
                (status, format!("An error occurred: {}", self.error)).into_response()
            }
        }
    }
}
