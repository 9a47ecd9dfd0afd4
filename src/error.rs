//! Error types for the microservices

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Upload request carries no `file` part
    #[error("No file part in the request")]
    NoFilePart,

    /// `file` part has an empty filename
    #[error("No selected file")]
    NoSelectedFile,

    /// Multipart body could not be read
    #[error("{0}")]
    Upload(String),

    /// Database unreachable or query failure
    #[error("{0}")]
    Database(String),

    /// Failure while running the synthetic workload
    #[error("{0}")]
    Processing(String),

    /// Metrics encoding error
    #[error("Metrics error: {0}")]
    Metrics(String),

    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl AppError {
    /// HTTP status reported when the error reaches a handler boundary
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NoFilePart | AppError::NoSelectedFile | AppError::Upload(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<tokio_postgres::Error> for AppError {
    fn from(error: tokio_postgres::Error) -> Self {
        Self::Database(error.to_string())
    }
}

impl From<std::fmt::Error> for AppError {
    fn from(error: std::fmt::Error) -> Self {
        Self::Metrics(error.to_string())
    }
}

/// JSON body returned for every handler error
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;
