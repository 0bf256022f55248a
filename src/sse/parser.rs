//! SSE stream parsing logic
//!
//! Contains the stateful SseParser for accumulating lines and emitting events.

use crate::sse::events::{SseEvent, SseLine};

/// Parse a single SSE line into its component type
pub fn parse_sse_line(line: &str) -> SseLine {
    if line.is_empty() {
        return SseLine::Empty;
    }

    if let Some(stripped) = line.strip_prefix(':') {
        return SseLine::Comment(stripped.trim().to_string());
    }

    if let Some(rest) = line.strip_prefix("event:") {
        return SseLine::Event(rest.trim().to_string());
    }

    if let Some(rest) = line.strip_prefix("data:") {
        // Only the single separator space belongs to the framing
        return SseLine::Data(rest.strip_prefix(' ').unwrap_or(rest).to_string());
    }

    // Unknown line format (id:, retry:, garbage) - treat as comment
    SseLine::Comment(line.to_string())
}

/// Stateful SSE parser that accumulates lines and emits complete events
#[derive(Debug, Default)]
pub struct SseParser {
    /// Current event type being accumulated
    current_event_type: Option<String>,
    /// Accumulated data lines (SSE allows multiple data: lines)
    data_buffer: Vec<String>,
}

impl SseParser {
    /// Create a new SSE parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a line to the parser, returning the event a blank line completes.
    ///
    /// An event that declared a type but carried no data comes out with empty
    /// `data`; consumers skip it like any other payload without text.
    pub fn feed_line(&mut self, line: &str) -> Option<SseEvent> {
        match parse_sse_line(line) {
            SseLine::Event(event_type) => {
                self.current_event_type = Some(event_type);
                None
            }
            SseLine::Data(data) => {
                self.data_buffer.push(data);
                None
            }
            SseLine::Empty => self.take_event(),
            SseLine::Comment(_) => None,
        }
    }

    /// Emit whatever event is still pending when the body ends without a
    /// terminating blank line.
    pub fn finish(&mut self) -> Option<SseEvent> {
        self.take_event()
    }

    fn take_event(&mut self) -> Option<SseEvent> {
        if self.current_event_type.is_none() && self.data_buffer.is_empty() {
            return None;
        }
        let data = self.data_buffer.join("\n");
        self.data_buffer.clear();
        Some(SseEvent::new(self.current_event_type.take(), data))
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.current_event_type = None;
        self.data_buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(parse_sse_line(""), SseLine::Empty);
    }

    #[test]
    fn test_parse_comment_line() {
        assert_eq!(
            parse_sse_line(": keepalive"),
            SseLine::Comment("keepalive".to_string())
        );
    }

    #[test]
    fn test_parse_event_line() {
        assert_eq!(
            parse_sse_line("event:   message  "),
            SseLine::Event("message".to_string())
        );
    }

    #[test]
    fn test_parse_data_line_keeps_inner_spacing() {
        assert_eq!(
            parse_sse_line("data: {\"x\":1}"),
            SseLine::Data("{\"x\":1}".to_string())
        );
        assert_eq!(parse_sse_line("data:{}"), SseLine::Data("{}".to_string()));
        assert_eq!(parse_sse_line("data:   a"), SseLine::Data("  a".to_string()));
    }

    #[test]
    fn test_parse_unknown_line() {
        assert_eq!(
            parse_sse_line("retry: 1000"),
            SseLine::Comment("retry: 1000".to_string())
        );
    }

    #[test]
    fn test_parser_data_only_event() {
        let mut parser = SseParser::new();
        assert!(parser.feed_line(r#"data: {"a":1}"#).is_none());
        assert_eq!(parser.feed_line(""), Some(SseEvent::data(r#"{"a":1}"#)));
    }

    #[test]
    fn test_parser_multiple_events() {
        let mut parser = SseParser::new();
        parser.feed_line("data: first");
        assert_eq!(parser.feed_line(""), Some(SseEvent::data("first")));
        parser.feed_line("event: message");
        parser.feed_line("data: second");
        assert_eq!(
            parser.feed_line(""),
            Some(SseEvent::new(Some("message".to_string()), "second"))
        );
    }

    #[test]
    fn test_parser_joins_multiple_data_lines() {
        let mut parser = SseParser::new();
        parser.feed_line("data: line1");
        parser.feed_line("data: line2");
        assert_eq!(parser.feed_line(""), Some(SseEvent::data("line1\nline2")));
    }

    #[test]
    fn test_parser_ignores_comments_and_blank_runs() {
        let mut parser = SseParser::new();
        assert!(parser.feed_line("").is_none());
        parser.feed_line(": keepalive");
        parser.feed_line("data: x");
        parser.feed_line(": another");
        assert_eq!(parser.feed_line(""), Some(SseEvent::data("x")));
        assert!(parser.feed_line("").is_none());
    }

    #[test]
    fn test_event_without_data_is_empty() {
        let mut parser = SseParser::new();
        parser.feed_line("event: message");
        assert_eq!(
            parser.feed_line(""),
            Some(SseEvent::new(Some("message".to_string()), ""))
        );
        parser.feed_line("data: next");
        assert_eq!(parser.feed_line(""), Some(SseEvent::data("next")));
    }

    #[test]
    fn test_finish_flushes_unterminated_event() {
        let mut parser = SseParser::new();
        parser.feed_line("data: trailing");
        assert_eq!(parser.finish(), Some(SseEvent::data("trailing")));
        assert!(parser.finish().is_none());
    }

    #[test]
    fn test_parser_reset() {
        let mut parser = SseParser::new();
        parser.feed_line("data: x");
        parser.reset();
        assert!(parser.feed_line("").is_none());
    }
}
