use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

/// A single-line text input with cursor handling and horizontal scrolling.
///
/// The cursor is a character index, so accented letters and `¿`/`¡` edit
/// as single units.
#[derive(Debug, Clone, Default)]
pub struct InputLine {
    content: String,
    /// Cursor position (character index)
    cursor: usize,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Insert a string at the cursor. Line breaks become spaces.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '\r' => {}
                '\n' => self.insert_char(' '),
                c => self.insert_char(c),
            }
        }
    }

    /// Delete the character under the cursor (Delete key).
    pub fn delete_char(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character before the cursor (Backspace key).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Move the cursor one character left.
    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the start of the line.
    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Current text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor position as a character index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Take the content, leaving the input empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.content)
    }

    /// Remove all text and reset the cursor.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// True when there is nothing but whitespace to send.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// First character index to draw so the cursor fits in `width` columns.
    fn scroll_offset(&self, width: usize) -> usize {
        if width == 0 {
            return 0;
        }
        let chars: Vec<char> = self.content.chars().collect();
        let mut start = 0;
        // Columns from `start` up to the cursor, plus one for the cursor cell
        let mut used: usize = chars[..self.cursor]
            .iter()
            .map(|c| c.width().unwrap_or(0))
            .sum::<usize>()
            + 1;
        while used > width && start < self.cursor {
            used -= chars[start].width().unwrap_or(0);
            start += 1;
        }
        start
    }
}

/// Renderable view of an [`InputLine`].
pub struct InputLineWidget<'a> {
    input: &'a InputLine,
    placeholder: &'a str,
    enabled: bool,
    accent: Color,
}

impl<'a> InputLineWidget<'a> {
    /// Widget over `input`, showing `placeholder` while it is empty.
    pub fn new(input: &'a InputLine, placeholder: &'a str) -> Self {
        Self {
            input,
            placeholder,
            enabled: true,
            accent: Color::Cyan,
        }
    }

    /// Disabled inputs draw dimmed and without a cursor.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Color of the cursor cell and of the border while enabled.
    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }
}

impl Widget for InputLineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.enabled { self.accent } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let y = inner.y + inner.height.saturating_sub(1) / 2;
        let width = inner.width as usize;

        if self.input.is_empty() {
            let style = Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC);
            buf.set_stringn(inner.x + 1, y, self.placeholder, width.saturating_sub(1), style);
            if self.enabled {
                buf.set_string(inner.x, y, " ", Style::default().bg(self.accent));
            }
            return;
        }

        let text_style = if self.enabled {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let offset = self.input.scroll_offset(width);
        let mut x = 0usize;
        let mut cursor_x = None;
        for (i, c) in self.input.content().chars().enumerate().skip(offset) {
            if i == self.input.cursor() {
                cursor_x = Some(x);
            }
            let w = c.width().unwrap_or(0);
            if x + w > width {
                break;
            }
            buf.set_string(inner.x + x as u16, y, c.to_string(), text_style);
            x += w;
        }
        if self.input.cursor() == self.input.char_count() {
            cursor_x = Some(x);
        }

        if self.enabled {
            if let Some(cx) = cursor_x.filter(|cx| *cx < width) {
                let under = self
                    .input
                    .content()
                    .chars()
                    .nth(self.input.cursor())
                    .unwrap_or(' ');
                buf.set_string(
                    inner.x + cx as u16,
                    y,
                    under.to_string(),
                    Style::default().fg(Color::Black).bg(self.accent),
                );
            }
        }
    }
}
