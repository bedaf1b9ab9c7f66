//! Error types for summarization requests.
//!
//! Every failed request maps to exactly one [`SummarizeError`] variant, so the
//! caller decides what to show from the variant, never from message text.

use std::error::Error as StdError;
use thiserror::Error;

use crate::config::CredentialError;

/// Classified failure of one summarization request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizeError {
    /// Input exceeds the configured character limit. No request was sent.
    #[error("Input too long: {len} characters (maximum is {max})")]
    InputTooLong { len: usize, max: usize },

    /// Input is empty or whitespace only. No request was sent.
    #[error("Text cannot be empty")]
    EmptyInput,

    /// HTTP 401 from the endpoint.
    #[error("Unauthorized: the API key was rejected (HTTP 401)")]
    Unauthorized,

    /// HTTP 400 from the endpoint, with the raw response body.
    #[error("Bad request (HTTP 400): {0}")]
    BadRequest(String),

    /// Any other non-success HTTP status.
    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// The service answered successfully but reported an error in the body.
    #[error("API error: {0}")]
    Api(String),

    /// Successful response whose JSON shape is not recognized.
    #[error("Unexpected response format: {0}")]
    UnexpectedFormat(String),

    /// Connection, DNS, TLS or timeout failure.
    #[error("Network failure: {0}")]
    Network(String),

    /// Anything else that went wrong during the call.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl SummarizeError {
    /// Stable tag for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SummarizeError::InputTooLong { .. } => "input_too_long",
            SummarizeError::EmptyInput => "empty_input",
            SummarizeError::Unauthorized => "unauthorized",
            SummarizeError::BadRequest(_) => "bad_request",
            SummarizeError::RequestFailed { .. } => "request_failed",
            SummarizeError::Api(_) => "api_error",
            SummarizeError::UnexpectedFormat(_) => "unexpected_format",
            SummarizeError::Network(_) => "network_failure",
            SummarizeError::Unexpected(_) => "unexpected_error",
        }
    }

    /// True when the request was rejected locally and never dispatched.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            SummarizeError::InputTooLong { .. } | SummarizeError::EmptyInput
        )
    }
}

/// Map a reqwest failure to its outcome.
///
/// Failures that happen before or while talking to the server are network
/// failures, including a body cut short by a timeout or a dropped
/// connection. A body that arrived but cannot be decoded is unexpected.
impl From<reqwest::Error> for SummarizeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() || interrupted_body(&err) {
            SummarizeError::Network(err.to_string())
        } else {
            SummarizeError::Unexpected(err.to_string())
        }
    }
}

/// True when reading the response body failed at the transport level.
///
/// Only a payload rejected by the decompressor counts as a decode problem.
fn interrupted_body(err: &reqwest::Error) -> bool {
    if err.is_body() {
        return true;
    }
    if !err.is_decode() {
        return false;
    }

    let mut source = StdError::source(err);
    while let Some(cause) = source {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            if io.kind() == std::io::ErrorKind::InvalidData {
                return false;
            }
        }
        source = cause.source();
    }
    true
}

/// Errors from building a [`SummarizerClient`](super::SummarizerClient).
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error("Failed to build HTTP client: {0}")]
    Http(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(SummarizeError::Unauthorized.kind(), "unauthorized");
        assert_eq!(
            SummarizeError::Network("refused".to_string()).kind(),
            "network_failure"
        );
        assert_eq!(
            SummarizeError::InputTooLong { len: 6000, max: 5000 }.kind(),
            "input_too_long"
        );
    }

    #[test]
    fn test_local_errors() {
        assert!(SummarizeError::EmptyInput.is_local());
        assert!(SummarizeError::InputTooLong { len: 2, max: 1 }.is_local());
        assert!(!SummarizeError::Unauthorized.is_local());
        assert!(!SummarizeError::Api("overloaded".to_string()).is_local());
    }

    #[test]
    fn test_messages_carry_details() {
        let err = SummarizeError::InputTooLong { len: 5001, max: 5000 };
        assert_eq!(
            err.to_string(),
            "Input too long: 5001 characters (maximum is 5000)"
        );

        let err = SummarizeError::RequestFailed {
            status: 503,
            body: "Service Unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("Service Unavailable"));
    }
}
