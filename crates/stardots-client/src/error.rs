//! Client error types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by the transport and codec layers.
///
/// HTTP 4xx/5xx are deliberately absent: any response the server manages to
/// send decodes into the common envelope, whose `success` and `code` fields
/// carry the business outcome. Errors are reserved for connection-level
/// and serialization failures.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The constructed request URL is malformed; fails before any I/O
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport succeeded but returned no body where one was expected
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Connection-level failure: DNS, TLS, timeout, refused
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response bytes did not parse into the envelope shape
    #[error("decoding error: {0}")]
    Decoding(String),

    /// Outbound parameters could not be serialized
    #[error("encoding error: {0}")]
    Encoding(String),
}
