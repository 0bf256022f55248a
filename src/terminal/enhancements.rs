//! Kitty keyboard protocol flags.
//!
//! With the flags pushed, supporting terminals report Shift+Enter as a
//! distinct key, which the chat input ignores instead of sending. Other
//! terminals silently keep legacy reporting.

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
};
use std::io::Write;

/// Returns `false` when the flags could not be written.
pub fn push_keyboard_enhancements<W: Write>(writer: &mut W) -> bool {
    execute!(
        writer,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
    )
    .is_ok()
}

pub fn pop_keyboard_enhancements<W: Write>(writer: &mut W) -> bool {
    execute!(writer, PopKeyboardEnhancementFlags).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_then_pop() {
        let mut buffer = Vec::new();
        assert!(push_keyboard_enhancements(&mut buffer));
        assert!(pop_keyboard_enhancements(&mut buffer));
        let text = String::from_utf8_lossy(&buffer);
        assert!(text.contains("\x1b[>1u"));
        assert!(text.contains("\x1b[<1u"));
    }
}
