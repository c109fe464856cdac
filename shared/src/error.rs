//! Model error types
//!
//! Errors raised when text coming from the command line or a query
//! string is turned into one of the typed model values.

use thiserror::Error;

/// Error parsing a model value from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Unknown status for the given record kind
    #[error("Unknown {kind} status: {value}")]
    UnknownStatus { kind: &'static str, value: String },

    /// Unknown status action
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// Unknown date range filter
    #[error("Unknown date range: {0}")]
    UnknownDateRange(String),

    /// Unknown gallery category
    #[error("Unknown gallery category: {0}")]
    UnknownCategory(String),

    /// Unknown locale code
    #[error("Unsupported locale: {0}")]
    UnknownLocale(String),

    /// Date that is neither `YYYY-MM-DD` nor RFC 3339
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Result type for model parsing
pub type ModelResult<T> = Result<T, ModelError>;
