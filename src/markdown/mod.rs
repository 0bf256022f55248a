//! Markdown parser for terminal rendering
//!
//! Converts model replies to styled ratatui Lines. Handles code blocks,
//! inline code, bold, italic, headings, lists, quotes and links. Text is
//! not wrapped here; the transcript paragraph wraps it.

mod styles;

pub use styles::{STYLE_CODE_BLOCK, STYLE_HEADING, STYLE_INLINE_CODE, STYLE_LINK, STYLE_QUOTE};

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Render markdown text to a vector of styled Lines.
///
/// Gracefully handles incomplete markdown during streaming by rendering
/// partial content without crashing.
pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    render_markdown_with_style(text, Style::default())
}

/// Like [`render_markdown`], with `base` under every span.
pub fn render_markdown_with_style(text: &str, base: Style) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut renderer = Renderer::new(base);
    for event in Parser::new_ext(text, options) {
        renderer.event(event);
    }
    renderer.finish()
}

struct Renderer {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    /// Style stack for nested formatting
    styles: Vec<Style>,
    /// One entry per open list: next number for ordered lists
    lists: Vec<Option<u64>>,
    in_code_block: bool,
    quote_depth: usize,
}

impl Renderer {
    fn new(base: Style) -> Self {
        Self {
            lines: Vec::new(),
            current: Vec::new(),
            styles: vec![base],
            lists: Vec::new(),
            in_code_block: false,
            quote_depth: 0,
        }
    }

    fn style(&self) -> Style {
        self.styles.last().copied().unwrap_or_default()
    }

    fn push_style(&mut self, f: impl FnOnce(Style) -> Style) {
        let next = f(self.style());
        self.styles.push(next);
    }

    fn pop_style(&mut self) {
        if self.styles.len() > 1 {
            self.styles.pop();
        }
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            let spans = std::mem::take(&mut self.current);
            self.lines.push(Line::from(spans));
        }
    }

    /// Blank separator before a new block, unless at the top or already blank.
    fn separate(&mut self) {
        self.flush();
        if !self.lines.is_empty() && self.lists.is_empty() {
            let last_blank = self
                .lines
                .last()
                .map(|l| l.spans.iter().all(|s| s.content.trim().is_empty()))
                .unwrap_or(true);
            if !last_blank {
                self.lines.push(Line::default());
            }
        }
    }

    fn start_line(&mut self) {
        if self.current.is_empty() && self.quote_depth > 0 {
            self.current
                .push(Span::styled("│ ".repeat(self.quote_depth), STYLE_QUOTE));
        }
    }

    fn text(&mut self, text: &str) {
        let style = self.style();
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                self.lines.push(Line::from(std::mem::take(&mut self.current)));
            }
            if !part.is_empty() {
                self.start_line();
                self.current.push(Span::styled(part.to_string(), style));
            }
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => {
                    if self.lists.is_empty() {
                        self.separate();
                    }
                }
                Tag::Heading { .. } => {
                    self.separate();
                    self.styles.push(STYLE_HEADING);
                }
                Tag::CodeBlock(_) => {
                    self.separate();
                    self.in_code_block = true;
                    self.styles.push(STYLE_CODE_BLOCK);
                }
                Tag::BlockQuote { .. } => {
                    self.separate();
                    self.quote_depth += 1;
                    self.push_style(|s| s.patch(STYLE_QUOTE));
                }
                Tag::List(start) => {
                    if self.lists.is_empty() {
                        self.separate();
                    } else {
                        self.flush();
                    }
                    self.lists.push(start);
                }
                Tag::Item => {
                    self.flush();
                    let indent = "  ".repeat(self.lists.len().saturating_sub(1));
                    let marker = match self.lists.last_mut() {
                        Some(Some(n)) => {
                            let marker = format!("{indent}{n}. ");
                            *n += 1;
                            marker
                        }
                        _ => format!("{indent}• "),
                    };
                    self.start_line();
                    self.current.push(Span::styled(marker, self.style()));
                }
                Tag::Strong => self.push_style(|s| s.add_modifier(Modifier::BOLD)),
                Tag::Emphasis => self.push_style(|s| s.add_modifier(Modifier::ITALIC)),
                Tag::Strikethrough => self.push_style(|s| s.add_modifier(Modifier::CROSSED_OUT)),
                Tag::Link { .. } => self.push_style(|s| s.patch(STYLE_LINK)),
                _ => {}
            },
            Event::End(tag_end) => match tag_end {
                TagEnd::Paragraph | TagEnd::Item => self.flush(),
                TagEnd::Heading(_) => {
                    self.flush();
                    self.pop_style();
                }
                TagEnd::CodeBlock => {
                    self.flush();
                    self.in_code_block = false;
                    self.pop_style();
                }
                TagEnd::BlockQuote { .. } => {
                    self.flush();
                    self.quote_depth = self.quote_depth.saturating_sub(1);
                    self.pop_style();
                }
                TagEnd::List(_) => {
                    self.flush();
                    self.lists.pop();
                }
                TagEnd::Strong | TagEnd::Emphasis | TagEnd::Strikethrough | TagEnd::Link => {
                    self.pop_style()
                }
                _ => {}
            },
            Event::Text(text) => {
                if self.in_code_block {
                    // Keep whitespace; the fence's trailing newline is not a line
                    let body = text.strip_suffix('\n').unwrap_or(&text);
                    self.text(body);
                    self.flush();
                } else {
                    self.text(&text);
                }
            }
            Event::Code(code) => {
                self.start_line();
                self.current
                    .push(Span::styled(code.to_string(), STYLE_INLINE_CODE));
            }
            Event::SoftBreak => {
                self.current.push(Span::styled(" ", self.style()));
            }
            Event::HardBreak => {
                self.lines.push(Line::from(std::mem::take(&mut self.current)));
            }
            Event::Rule => {
                self.separate();
                self.lines.push(Line::styled("────────", STYLE_CODE_BLOCK));
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        if self.lines.is_empty() {
            self.lines.push(Line::default());
        }
        self.lines
    }
}
