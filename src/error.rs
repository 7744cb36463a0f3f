//! Error types for the Aria gateway

use thiserror::Error;

/// Result type alias for Aria operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the Aria gateway
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Chat completion error
    #[error("chat error: {0}")]
    Chat(String),

    /// Context summarization error
    #[error("summarize error: {0}")]
    Summarize(String),

    /// Speech synthesis error
    #[error("TTS error: {0}")]
    Tts(String),

    /// Upstream returned a non-success status
    #[error("upstream error {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Upstream returned a response with no usable payload
    #[error("empty response from upstream: {0}")]
    EmptyResponse(&'static str),

    /// Malformed data URI
    #[error("invalid data URI: {0}")]
    DataUri(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Base64 decoding error
    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
}
