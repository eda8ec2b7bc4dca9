//! Subscription decoding errors.

use thiserror::Error;

/// Errors raised while fetching or decoding a subscription.
///
/// A line whose scheme is not supported is not an error; the decoder
/// reports it as `Ok(None)` and the batch continues.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Network or HTTP layer failure while downloading a subscription.
    #[error("failed to fetch subscription: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Base64 payload could not be decoded.
    #[error("malformed base64 encoding: {0}")]
    MalformedEncoding(#[from] base64::DecodeError),

    /// Decoded payload is structurally invalid (bad JSON, missing delimiter or field).
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// A subscription line is not a valid URI.
    #[error("invalid link {line:?}: {source}")]
    InvalidUri {
        line: String,
        #[source]
        source: url::ParseError,
    },
}

impl DecodeError {
    pub(crate) fn payload(msg: impl Into<String>) -> Self {
        DecodeError::MalformedPayload(msg.into())
    }
}

/// Result type for subscription operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
