use thiserror::Error;

/// Errors returned by [`SecretClient`](super::SecretClient).
///
/// The server's HTTP status is never turned into an error: a 4xx/5xx response
/// with a JSON body is handed back like any other envelope.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response body could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("failed to decode response body as JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot be used to build request URLs.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
