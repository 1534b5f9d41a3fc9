//! Error types for the source adapters

use thiserror::Error;

/// Errors that can occur while fetching from an upstream source.
///
/// These never leave an adapter: `SourceAdapter::fetch` converts them into
/// a fallback or an empty contribution.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Upstream returned a non-success status
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message or URL
        message: String,
    },

    /// Failed to parse upstream payload
    #[error("Parse error: {0}")]
    ParseError(String),
}
