//! SSE event types and definitions

use thiserror::Error;

/// Represents a parsed SSE line
#[derive(Debug, Clone, PartialEq)]
pub enum SseLine {
    /// Event type declaration (e.g., "event: message")
    Event(String),
    /// Data payload (e.g., "data: {\"candidates\": []}")
    Data(String),
    /// Empty line - signals end of event
    Empty,
    /// Comment line (starts with ':')
    Comment(String),
}

/// A complete event: the optional declared type plus the joined data lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SseEvent {
    pub event_type: Option<String>,
    pub data: String,
}

impl SseEvent {
    pub fn new(event_type: Option<String>, data: impl Into<String>) -> Self {
        Self {
            event_type,
            data: data.into(),
        }
    }

    /// Data-only event, the shape Gemini sends.
    pub fn data(data: impl Into<String>) -> Self {
        Self::new(None, data)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SseParseError {
    /// A complete line was not valid UTF-8
    #[error("invalid UTF-8 in SSE line: {0}")]
    InvalidUtf8(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_constructor() {
        let event = SseEvent::data("{}");
        assert_eq!(event.event_type, None);
        assert_eq!(event.data, "{}");
    }

    #[test]
    fn test_error_display() {
        let err = SseParseError::InvalidUtf8("invalid utf-8 sequence".to_string());
        assert_eq!(
            err.to_string(),
            "invalid UTF-8 in SSE line: invalid utf-8 sequence"
        );
    }
}
