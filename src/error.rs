//! Error types for AeroAPI operations.

use thiserror::Error;

/// Errors that can occur while configuring the client or issuing a request.
///
/// Request-time variants (`Transport`, `HttpStatus`, `Decode`) never reach
/// callers of [`AeroApiClient::get`](crate::AeroApiClient::get) or
/// [`AeroApiClient::post`](crate::AeroApiClient::post); those methods log the
/// error and return `None`.
#[derive(Debug, Error)]
pub enum AeroApiError {
    /// Configuration is missing or incomplete.
    #[error("AeroAPI configuration required: {0}")]
    ConfigMissing(String),

    /// Configuration value is present but unusable.
    #[error("Invalid AeroAPI configuration: {0}")]
    InvalidConfig(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// The API key cannot be sent as a header value.
    #[error("Invalid header value for '{0}'")]
    InvalidHeader(&'static str),

    /// HTTP transport error (DNS, connect, TLS, timeout).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote service answered with a non-2xx status.
    #[error("AeroAPI returned HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Response body is not valid JSON.
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Unknown flight search operator.
    #[error("Unknown search operator '{0}'")]
    InvalidSearchOperator(String),
}

/// Result type alias for AeroAPI operations.
pub type Result<T> = core::result::Result<T, AeroApiError>;
