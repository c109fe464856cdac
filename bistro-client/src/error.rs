//! Client error types

use shared::models::StatusAction;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connection refused, DNS, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-OK response carrying an `{error}` body
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Login rejected; the message is shown to the operator as-is
    #[error("{0}")]
    Auth(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Action not offered for the record's current status
    #[error("Cannot {action} a {kind} that is {status}")]
    InvalidTransition {
        kind: &'static str,
        status: String,
        action: StatusAction,
    },

    /// Token store failure
    #[error("Token storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Share capability failure
    #[error("Share failed: {0}")]
    Share(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
