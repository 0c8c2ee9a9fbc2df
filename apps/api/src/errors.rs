#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The engine never retries and never substitutes defaults for bad input:
/// validation failures name the offending field so the caller can re-prompt,
/// and computation failures indicate a broken internal invariant.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Computation error: {0}")]
    Computation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),

    #[error("Not implemented")]
    NotImplemented,
}

impl AppError {
    /// Shorthand for a field-level validation failure.
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, field, message) = match &self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                Some(field.clone()),
                message.clone(),
            ),
            AppError::UnknownCategory(cat) => (
                StatusCode::BAD_REQUEST,
                "UNKNOWN_CATEGORY",
                Some("category".to_string()),
                format!("'{cat}' is not a recognized product category"),
            ),
            AppError::Computation(msg) => {
                tracing::error!("Computation error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "COMPUTATION_ERROR",
                    None,
                    "An internal computation error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    None,
                    "An internal server error occurred".to_string(),
                )
            }
            AppError::NotImplemented => (
                StatusCode::NOT_IMPLEMENTED,
                "NOT_IMPLEMENTED",
                None,
                "This endpoint is not yet implemented".to_string(),
            ),
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(field) = field {
            error["field"] = json!(field);
        }

        let body = Json(json!({ "error": error }));

        (status, body).into_response()
    }
}
