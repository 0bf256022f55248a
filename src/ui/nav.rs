//! Sidebar and compact tab bar.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, View};
use crate::content::texts::{APP_TITLE, CREDITS};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_GEMINI, COLOR_HEADER, COLOR_TEXT};

fn view_icon(view: View) -> &'static str {
    match view {
        View::Home => "⌂",
        View::Learn => "▤",
        View::Chat => "✉",
        View::Simulation => "⚖",
    }
}

/// Full sidebar: title, the four views, model box and credits.
pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, items_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(7),
    ])
    .areas(inner);

    let title = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("⚖ ", Style::default().fg(COLOR_ACCENT)),
            Span::styled(
                APP_TITLE,
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled("─".repeat(inner.width as usize), Style::default().fg(COLOR_BORDER))),
    ]);
    frame.render_widget(title, title_area);

    let items: Vec<Line> = View::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, view)| {
            let active = *view == app.view();
            let style = if active {
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_TEXT)
            };
            let marker = if active { "▌" } else { " " };
            [
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
                    Span::styled(format!(" {} {}", view_icon(*view), view.title()), style),
                    Span::styled(format!("  F{}", i + 1), Style::default().fg(COLOR_DIM)),
                ]),
                Line::default(),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(items), items_area);

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(
            "Potenciado por Gemini",
            Style::default().fg(COLOR_GEMINI).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Modelo: {}", app.model()),
            Style::default().fg(COLOR_GEMINI),
        )),
        Line::from(Span::styled("─".repeat(inner.width as usize), Style::default().fg(COLOR_BORDER))),
        Line::from(Span::styled("DESARROLLADO POR", Style::default().fg(COLOR_DIM))),
        Line::from(Span::styled(
            CREDITS.to_uppercase(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Tab cambia · Ctrl+C sale", Style::default().fg(COLOR_DIM))),
    ]);
    frame.render_widget(footer, footer_area);
}

/// One-row tab bar for narrow terminals.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = View::ALL
        .iter()
        .map(|view| Line::from(format!("{} {}", view_icon(*view), view.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.view().index())
        .style(Style::default().fg(COLOR_TEXT))
        .highlight_style(Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD))
        .divider(Span::styled("│", Style::default().fg(COLOR_BORDER)))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(COLOR_BORDER)),
        );
    frame.render_widget(tabs, area);
}
