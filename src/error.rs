use thiserror::Error;

/// Unified error type for catalog fetches and file loads
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// HTTP error status code
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised while reading attributes off a card record
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    /// The record has no value under this (already translated) key
    #[error("Card has no field '{0}'")]
    MissingField(String),
}

pub type CardResult<T> = Result<T, CardError>;
