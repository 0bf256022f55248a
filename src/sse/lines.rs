//! Splitting a chunked byte stream into text lines.

use super::events::SseParseError;

/// Accumulates raw body chunks and yields complete lines.
///
/// Splitting happens on bytes, so a multi-byte character that straddles two
/// chunks is decoded only once its line is complete. `\r\n` endings are
/// accepted.
#[derive(Debug, Default)]
pub struct LineBuffer {
    buffer: Vec<u8>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk received from the network.
    pub fn extend(&mut self, chunk: &[u8]) {
        self.buffer.extend_from_slice(chunk);
    }

    /// Take the next complete line, without its terminator.
    pub fn next_line(&mut self) -> Option<Result<String, SseParseError>> {
        let newline_pos = self.buffer.iter().position(|&b| b == b'\n')?;
        let mut line: Vec<u8> = self.buffer.drain(..=newline_pos).collect();
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Some(
            String::from_utf8(line)
                .map_err(|e| SseParseError::InvalidUtf8(e.utf8_error().to_string())),
        )
    }

    /// Terminate a trailing partial line so `next_line` can return it.
    pub fn close(&mut self) {
        if !self.buffer.is_empty() && self.buffer.last() != Some(&b'\n') {
            self.buffer.push(b'\n');
        }
    }

    /// True when no partial line is buffered.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(buffer: &mut LineBuffer) -> Vec<String> {
        let mut out = Vec::new();
        while let Some(line) = buffer.next_line() {
            out.push(line.unwrap());
        }
        out
    }

    #[test]
    fn test_splits_on_newlines() {
        let mut buffer = LineBuffer::new();
        buffer.extend(b"data: a\n\ndata: b\n");
        assert_eq!(drain(&mut buffer), vec!["data: a", "", "data: b"]);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_keeps_partial_line_until_complete() {
        let mut buffer = LineBuffer::new();
        buffer.extend(b"data: hel");
        assert!(buffer.next_line().is_none());
        buffer.extend(b"lo\n");
        assert_eq!(drain(&mut buffer), vec!["data: hello"]);
    }

    #[test]
    fn test_strips_carriage_return() {
        let mut buffer = LineBuffer::new();
        buffer.extend(b"data: x\r\n\r\n");
        assert_eq!(drain(&mut buffer), vec!["data: x", ""]);
    }

    #[test]
    fn test_multibyte_character_split_across_chunks() {
        let text = "data: audiencia está\n".as_bytes();
        // Split inside the two-byte 'á'
        let split = text.iter().position(|&b| b == 0xC3).unwrap() + 1;
        let mut buffer = LineBuffer::new();
        buffer.extend(&text[..split]);
        assert!(buffer.next_line().is_none());
        buffer.extend(&text[split..]);
        assert_eq!(drain(&mut buffer), vec!["data: audiencia está"]);
    }

    #[test]
    fn test_close_flushes_trailing_line() {
        let mut buffer = LineBuffer::new();
        buffer.extend(b"data: tail");
        buffer.close();
        assert_eq!(drain(&mut buffer), vec!["data: tail"]);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let mut buffer = LineBuffer::new();
        buffer.extend(&[0xFF, 0xFE, b'\n']);
        assert!(matches!(
            buffer.next_line(),
            Some(Err(SseParseError::InvalidUtf8(_)))
        ));
    }
}
