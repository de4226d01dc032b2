//! Error types for the quote service

use crate::core::notify::EmailError;
use thiserror::Error;

/// Result type alias for the quote service
pub type Result<T> = std::result::Result<T, QuoteError>;

/// Main error type for the quote service
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email provider errors
    #[error("Email error: {0}")]
    Email(#[from] EmailError),

    /// Draft storage errors
    #[error("Draft storage error: {0}")]
    Storage(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
