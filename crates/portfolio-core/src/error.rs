//! Error types for the portfolio page

use thiserror::Error;

/// Reasons a contact form submission is rejected before delivery.
///
/// The `Display` text is the exact message shown to the visitor in the
/// error notification.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// At least one of name, email or message was empty
    #[error("Please fill in all fields")]
    MissingField,

    /// The email address did not match the `local@domain.tld` pattern
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Main error type for portfolio page operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Contact form failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration file could not be interpreted
    #[error("Config error: {0}")]
    Config(String),

    /// The webview script bridge failed or closed
    #[error("Bridge error: {0}")]
    Bridge(String),

    /// A message sink refused an accepted contact message
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;
