//! Error types for saml-roster
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for saml-roster
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // ============================================================================
    // Response Shape Errors
    // ============================================================================
    #[error("Unexpected response shape, missing '{path}': {detail}")]
    Shape { path: String, detail: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a shape error naming the deepest missing response path
    pub fn shape(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Shape {
            path: path.into(),
            detail: detail.into(),
        }
    }

    /// Check if this error came from the transport layer (network or
    /// non-success status) as opposed to a malformed response body
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::HttpStatus { .. })
    }
}

/// Result type alias for saml-roster
pub type Result<T> = std::result::Result<T, Error>;
