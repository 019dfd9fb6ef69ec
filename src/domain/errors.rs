//! Errors surfaced by container-manager operations.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single container-manager call.
///
/// The client never retries or reclassifies: a non-2xx answer is reported as
/// [`ContainerApiError::Http`] with the status and body exactly as received.
#[derive(Error, Debug)]
pub enum ContainerApiError {
    /// The service answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Http {
        /// Status code returned by the service
        status: StatusCode,
        /// Raw response body, possibly empty
        body: String,
    },

    /// The request did not complete within the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Connection, DNS or other transport failure
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// A success response whose body does not match the declared shape
    #[error("Failed to decode {context} response: {source}")]
    Decode {
        /// Operation whose response failed to decode
        context: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Client construction was given an unusable base URL or token
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    /// A container id that cannot be used as a single path segment
    #[error("Invalid container id: {0:?}")]
    InvalidId(String),
}

impl ContainerApiError {
    /// HTTP status of the failed exchange, when a response was received.
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body of a non-success answer.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Http { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ContainerApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::Http {
                status,
                body: String::new(),
            }
        } else {
            Self::Network(err)
        }
    }
}

/// Result alias for container-manager operations
pub type ContainerResult<T> = Result<T, ContainerApiError>;
