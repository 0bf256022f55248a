//! Responsive layout helpers.
//!
//! `LayoutContext` carries the frame size so render functions can pick
//! between the sidebar layout and the compact tab bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Below this width the sidebar collapses into a tab bar.
pub const NARROW_WIDTH: u16 = 80;

/// Sidebar width in the wide layout.
pub const SIDEBAR_WIDTH: u16 = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    pub fn is_narrow(&self) -> bool {
        self.width < NARROW_WIDTH
    }

    /// Whether there is room for the home screen's cards side by side.
    pub fn cards_in_row(&self) -> bool {
        self.width >= 110
    }

    /// Text width for reading content, capped so lines stay readable.
    pub fn reading_width(&self, available: u16) -> u16 {
        available.min(100)
    }
}

/// Split the frame into navigation and content areas.
///
/// Returns `(nav, content)`: a left column when wide, a top row when narrow.
pub fn split_nav(area: Rect, ctx: &LayoutContext) -> (Rect, Rect) {
    if ctx.is_narrow() {
        let [nav, content] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
        (nav, content)
    } else {
        let [nav, content] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(area);
        (nav, content)
    }
}

/// A rect of at most `width` columns, centered horizontally in `area`.
pub fn center_horizontally(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
