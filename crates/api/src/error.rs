// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error handling module
//!
//! This module provides error types for server operations, including HTTP
//! response mapping. The gateway never inspects the kind of a service
//! failure: anything the service returns becomes an HTTP 500 with the full
//! wrapped message rendered as a flat `{"error": ...}` string. Only a request
//! body that fails to parse produces a 400, with a fixed generic message.

use std::net::SocketAddr;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nft_service::ServiceError;
use thiserror::Error;

/// Fixed message returned for unparseable trait property bodies; the
/// underlying parse error is never exposed to the caller
pub const INVALID_PROPERTIES_MESSAGE: &str = "Invalid properties format";

/// Error types for server operations
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration validation errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Network binding errors
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        /// Socket address that failed to bind
        address: SocketAddr,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Server startup errors
    #[error("Server startup failed: {source}")]
    Startup {
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Server shutdown errors
    #[error("Server shutdown failed: {source}")]
    Shutdown {
        /// Underlying IO error
        source: std::io::Error,
    },

    /// In-flight requests did not finish within the drain window
    #[error("Shutdown drain timed out after {timeout_seconds} seconds")]
    DrainTimeout {
        /// Drain window in seconds
        timeout_seconds: u64,
    },

    /// A service operation failed; mapped to HTTP 500 with the flat message
    #[error("{0}")]
    Service(#[from] ServiceError),

    /// Request body did not parse as an array of trait properties
    #[error("{INVALID_PROPERTIES_MESSAGE}")]
    InvalidProperties,
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::InvalidProperties => StatusCode::BAD_REQUEST,
            ServerError::Config { .. }
            | ServerError::Bind { .. }
            | ServerError::Startup { .. }
            | ServerError::Shutdown { .. }
            | ServerError::DrainTimeout { .. }
            | ServerError::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
