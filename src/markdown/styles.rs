//! Style constants for markdown rendering

use ratatui::style::{Color, Modifier, Style};

/// Style for code blocks - gray/dim color
pub const STYLE_CODE_BLOCK: Style = Style::new().fg(Color::DarkGray);

/// Style for inline code - cyan color
pub const STYLE_INLINE_CODE: Style = Style::new().fg(Color::Cyan);

/// Style for headings - amber and bold, like the app's accent
pub const STYLE_HEADING: Style = Style::new()
    .fg(Color::Rgb(245, 158, 11))
    .add_modifier(Modifier::BOLD);

/// Style for links - blue and underlined
pub const STYLE_LINK: Style = Style::new()
    .fg(Color::Blue)
    .add_modifier(Modifier::UNDERLINED);

/// Style for block quotes
pub const STYLE_QUOTE: Style = Style::new()
    .fg(Color::Gray)
    .add_modifier(Modifier::ITALIC);
