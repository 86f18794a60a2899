use thiserror::Error;

/// Errors that can occur when talking to the recommendation service
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The service answered with a non-2xx status.
    ///
    /// `snippet` holds at most the first 200 characters of the body.
    #[error("HTTP {status} from {endpoint}: {snippet}")]
    Request {
        status: u16,
        endpoint: String,
        snippet: String,
    },

    /// The request never got a response (connection refused, reset, ...)
    #[error("Failed to reach recommendation service: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Invalid response from recommendation service: {0}")]
    Decode(String),
}

impl ClientError {
    /// HTTP status for `Request` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
