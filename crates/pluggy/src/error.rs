//! Error types for the Pluggy API client.

use thiserror::Error;

/// Errors that can occur when using the Pluggy API.
#[derive(Debug, Error)]
pub enum PluggyError {
    /// Missing API key.
    #[error("PLUGGY_API_KEY environment variable not set")]
    MissingApiKey,

    /// HTTP request failed at the transport level.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned valid JSON that does not match the documented schema.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// The API rejected the request with a JSON error body.
    ///
    /// The body is surfaced verbatim so callers can inspect provider-specific
    /// error codes and messages.
    #[error("Pluggy API error (status {status}): {body}")]
    Api {
        /// HTTP status code of the rejected response.
        status: u16,
        /// JSON error body as returned by the API.
        body: serde_json::Value,
    },

    /// The API returned a body that could not be parsed as JSON.
    #[error("Invalid response (status {status}): {message}")]
    InvalidResponse {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response text.
        message: String,
    },
}
