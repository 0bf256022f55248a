use thiserror::Error;

use crate::sse::SseParseError;

/// Failure of a single send-and-stream exchange.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChatError {
    /// The service answered with a non-2xx status before streaming started
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Connection, TLS or mid-body read failure
    #[error("transport error: {0}")]
    Transport(String),

    /// A payload could not be decoded
    #[error("malformed response: {0}")]
    Parse(String),

    /// The service reported an error object inside the stream
    #[error("service error ({status}): {message}")]
    Service { status: String, message: String },

    #[error(transparent)]
    Sse(#[from] SseParseError),

    /// Failure injected by the scripted test backend
    #[error("scripted failure: {0}")]
    Scripted(String),
}

impl From<reqwest::Error> for ChatError {
    fn from(e: reqwest::Error) -> Self {
        ChatError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Parse(e.to_string())
    }
}
