//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when talking to the catalog API.
///
/// A non-2xx response is deliberately *not* an error here: callers that care
/// about the status code inspect [`crate::Response`] directly, and only
/// [`crate::Response::error_for_status`] converts a status into [`FetchError::Status`].
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, send failure).
    #[error("transport error: {0}")]
    Transport(String),

    /// A response arrived with a non-success status and the caller asked
    /// for it to be treated as an error.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl FetchError {
    /// Whether this error carries an HTTP status code.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_exposed_for_status_errors() {
        let err = FetchError::Status {
            status: 404,
            message: "not found".into(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "HTTP 404: not found");
    }

    #[test]
    fn transport_errors_carry_no_status() {
        let err = FetchError::Transport("connection refused".into());
        assert_eq!(err.status(), None);
    }
}
