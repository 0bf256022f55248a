//! UI rendering
//!
//! Draws the navigation (sidebar when wide, tab bar when narrow) and the
//! current view. Rendering only reads the [`App`]; the scroll limits it
//! measured are handed back so the event loop can clamp scroll offsets.

mod chat;
mod helpers;
mod home;
mod layout;
mod library;
mod nav;
mod simulation;
mod theme;

pub use chat::transcript_lines;
pub use helpers::estimate_wrapped_line_count;
pub use layout::{LayoutContext, NARROW_WIDTH};
pub use library::topic_lines;

use ratatui::Frame;

use crate::app::{App, View};

/// Largest scroll offsets that still show content, measured while drawing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollLimits {
    pub chat: Option<u16>,
    pub library: Option<u16>,
}

/// Render the UI for the current view.
pub fn render(frame: &mut Frame, app: &App) -> ScrollLimits {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);
    let (nav_area, content_area) = layout::split_nav(area, &ctx);

    if ctx.is_narrow() {
        nav::render_tab_bar(frame, nav_area, app);
    } else {
        nav::render_sidebar(frame, nav_area, app);
    }

    let mut limits = ScrollLimits::default();
    match app.view() {
        View::Home => home::render_home(frame, content_area, app, &ctx),
        View::Learn => {
            limits.library = Some(library::render_library(
                frame,
                content_area,
                &app.library,
                &ctx,
            ));
        }
        View::Chat => {
            limits.chat = Some(chat::render_chat(
                frame,
                content_area,
                &app.assistant_chat,
                app.tick_count,
            ));
        }
        View::Simulation => {
            let max = simulation::render_simulation(
                frame,
                content_area,
                &app.simulation,
                app.tick_count,
                &ctx,
            );
            if !app.simulation.in_catalog() {
                limits.chat = Some(max);
            }
        }
    }
    limits
}

impl App {
    /// Clamp scroll offsets to what the last frame could show.
    pub fn apply_scroll_limits(&mut self, limits: ScrollLimits) {
        if let Some(max) = limits.chat {
            if let Some(panel) = self.active_panel_mut() {
                panel.clamp_scroll(max);
            }
        }
        if let Some(max) = limits.library {
            self.library.clamp_scroll(max);
        }
    }
}
