//! SSE (Server-Sent Events) stream parser
//!
//! Parses the SSE framing used by Gemini's `streamGenerateContent?alt=sse`.
//! SSE format consists of:
//! - `event: <type>` - event type line
//! - `data: <json>` - data payload line (several lines are joined with `\n`)
//! - Empty line - signals end of event
//! - Lines starting with `:` - comments (ignored)
//!
//! # Module structure
//! - `events` - Event type definitions (SseEvent, SseLine, SseParseError)
//! - `lines` - Byte-chunk to line splitting that never cuts a UTF-8 sequence
//! - `parser` - Parsing logic (SseParser, parse_sse_line)

mod events;
mod lines;
mod parser;

pub use events::{SseEvent, SseLine, SseParseError};
pub use lines::LineBuffer;
pub use parser::{parse_sse_line, SseParser};
