//! Error types
//!
//! - `ServerError`: binding and serving the HTTP listener
//! - `AppError`: request-level errors returned by the host's handlers

use std::net::SocketAddr;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors raised while running the standalone server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Errors returned by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No layout has been assigned to the application")]
    LayoutNotSet,

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Path is reserved by the application: {0}")]
    ReservedPath(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::LayoutNotSet => {
                tracing::warn!("Layout requested before one was assigned");
                (StatusCode::NOT_FOUND, "Layout not set", None)
            }
            AppError::PageNotFound(path) => {
                (StatusCode::NOT_FOUND, "Not found", Some(path.clone()))
            }
            AppError::ReservedPath(path) => {
                (StatusCode::CONFLICT, "Reserved path", Some(path.clone()))
            }
            AppError::MethodNotAllowed(method) => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed",
                Some(method.clone()),
            ),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
