//! Learn screen: topic tree on the left, reading pane on the right.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::content::library::{Topic, LIBRARY};
use crate::state::LibraryState;

use super::helpers::{estimate_wrapped_line_count, truncate_to_width};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};

/// Render the Learn view. Returns the largest useful reading scroll.
pub fn render_library(
    frame: &mut Frame,
    area: Rect,
    library: &LibraryState,
    ctx: &LayoutContext,
) -> u16 {
    let (tree_area, reading_area) = if ctx.is_narrow() {
        let [tree, reading] =
            Layout::vertical([Constraint::Percentage(35), Constraint::Min(0)]).areas(area);
        (tree, reading)
    } else {
        let [tree, reading] =
            Layout::horizontal([Constraint::Length(38), Constraint::Min(0)]).areas(area);
        (tree, reading)
    };
    render_tree(frame, tree_area, library);
    render_reading(frame, reading_area, library)
}

fn render_tree(frame: &mut Frame, area: Rect, library: &LibraryState) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " Temario ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width.saturating_sub(4) as usize;
    let current_category = library.current_category();
    let current_topic = library.current_topic();

    let mut lines: Vec<Line> = Vec::new();
    let mut selected_row = 0usize;
    for category in LIBRARY {
        let active = category.id == current_category.id;
        let style = if active {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_TEXT)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", category.icon), style),
            Span::styled(truncate_to_width(category.title, width), style),
        ]));
        if active {
            for topic in category.topics {
                let selected = topic.id == current_topic.id;
                if selected {
                    selected_row = lines.len();
                }
                let (marker, style) = if selected {
                    ("▌ ", Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD))
                } else {
                    ("  ", Style::default().fg(COLOR_DIM))
                };
                lines.push(Line::from(vec![
                    Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
                    Span::styled(truncate_to_width(topic.title, width), style),
                ]));
            }
        }
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        "←/→ categoría · ↑/↓ tema",
        Style::default().fg(COLOR_DIM),
    )));

    // Keep the selected topic on screen in short terminals
    let height = inner.height as usize;
    let offset = (selected_row + 1).saturating_sub(height) as u16;
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);
}

/// Lines of a topic's reading pane: category label, title, prose, subtopics.
pub fn topic_lines(category_title: &str, topic: &Topic) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            category_title.to_uppercase(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            topic.title,
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    if !topic.content.is_empty() {
        for paragraph in topic.content.split('\n') {
            lines.push(Line::from(Span::styled(
                paragraph.to_string(),
                Style::default().fg(COLOR_TEXT),
            )));
        }
        lines.push(Line::default());
    }
    for sub in topic.subtopics {
        lines.push(Line::from(vec![
            Span::styled("◆ ", Style::default().fg(COLOR_ACCENT)),
            Span::styled(
                sub.title,
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ),
        ]));
        for detail in sub.details {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(COLOR_ACCENT)),
                Span::styled(*detail, Style::default().fg(COLOR_TEXT)),
            ]));
        }
        lines.push(Line::default());
    }
    lines
}

fn render_reading(frame: &mut Frame, area: Rect, library: &LibraryState) -> u16 {
    let block = Block::default().padding(Padding::new(2, 2, 1, 0));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body_area, hint_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let lines = topic_lines(library.current_category().title, library.current_topic());
    let total = estimate_wrapped_line_count(&lines, body_area.width as usize);
    let max_scroll = total.saturating_sub(body_area.height as usize) as u16;
    let scroll = library.scroll().min(max_scroll);

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        body_area,
    );
    if max_scroll > 0 {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("j/k PgUp/PgDn desplazar · {}/{}", scroll, max_scroll),
                Style::default().fg(COLOR_DIM),
            )),
            hint_area,
        );
    }
    max_scroll
}
