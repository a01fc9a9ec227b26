//! API error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use domain_documents::DocumentError;

use crate::auth::AuthError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String, details: Vec<String> },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ApiError {
    /// Builds an `InvalidRequest` listing each failing field
    ///
    /// `prefix` is prepended to every field name, e.g. `uploadedDocuments[2].`
    pub fn invalid_request(message: impl Into<String>, errors: &ValidationErrors, prefix: &str) -> Self {
        let mut details: Vec<String> = errors
            .field_errors()
            .iter()
            .map(|(field, failures)| {
                let codes = failures
                    .iter()
                    .map(|failure| failure.code.as_ref())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}{}: {}", prefix, field, codes)
            })
            .collect();
        details.sort();

        ApiError::InvalidRequest {
            message: message.into(),
            details,
        }
    }

    /// Builds an `InvalidRequest` for a body that is not the expected JSON shape
    pub fn malformed_body(message: impl Into<String>, rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest {
            message: message.into(),
            details: vec![rejection.body_text()],
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match self {
            ApiError::InvalidRequest { message, details } => {
                (StatusCode::BAD_REQUEST, "bad_request", message, Some(details))
            }
            ApiError::Auth(err @ AuthError::MissingPermission(_)) => {
                (StatusCode::FORBIDDEN, "forbidden", err.to_string(), None)
            }
            ApiError::Auth(err) => (StatusCode::UNAUTHORIZED, "unauthorized", err.to_string(), None),
            ApiError::Document(err) => {
                let details = err.missing_codes();
                (
                    StatusCode::BAD_REQUEST,
                    "missing_documents",
                    "Cannot generate packet: Missing required documents".to_string(),
                    Some(details),
                )
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}
