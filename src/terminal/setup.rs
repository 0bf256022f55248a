//! Entering and leaving TUI mode.

use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

use super::enhancements::pop_keyboard_enhancements;

/// Alternate screen plus bracketed paste, so a pasted block arrives as one
/// `Event::Paste` instead of a burst of key presses.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableBracketedPaste)
}

/// Undo [`enter_tui_mode`] and raw mode. Errors are ignored; safe to call
/// more than once.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableBracketedPaste, LeaveAlternateScreen);

    // CSI = 0 u clears every keyboard enhancement flag. Some terminals only
    // honor it after the alternate screen is gone.
    let _ = write!(writer, "\x1b[=0u");
    let _ = writer.flush();

    let _ = execute!(writer, Show);
}

/// Full restore on stdout: pop the enhancement flags, then leave TUI mode.
pub fn emergency_restore() {
    let mut stdout = io::stdout();
    pop_keyboard_enhancements(&mut stdout);
    leave_tui_mode(&mut stdout);
}
