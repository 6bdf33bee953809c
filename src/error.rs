// src/error.rs

//! Unified error handling for the wellness application.

use thiserror::Error;

/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport failed (timeout, connection, TLS)
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Catalog credential rejected (HTTP 401)
    #[error("Unauthorized (401): invalid or expired catalog token")]
    Auth,

    /// Catalog credential lacks required permissions (HTTP 403)
    #[error("Forbidden (403): token lacks required permissions")]
    Permission,

    /// Any other non-success HTTP status from an upstream service
    #[error("Upstream HTTP error: status {0}")]
    Status(u16),

    /// Upstream response body did not have the expected shape
    #[error("Unexpected response shape: {0}")]
    Shape(String),

    /// User input failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// A requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a response-shape error.
    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape(message.into())
    }

    /// The upstream HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth => Some(401),
            Self::Permission => Some(403),
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}
