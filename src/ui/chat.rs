//! Chat panel rendering, shared by the assistant and the simulations.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::content::texts::{AI_DISCLAIMER, EMPTY_CHAT_HINT};
use crate::markdown::render_markdown_with_style;
use crate::models::ChatMessage;
use crate::state::{ChatMode, ChatPanel};
use crate::widgets::InputLineWidget;

use super::helpers::{estimate_wrapped_line_count, spinner_frame};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_MODEL,
    COLOR_SIMULATION, COLOR_TEXT, COLOR_USER,
};

fn accent(mode: ChatMode) -> Color {
    match mode {
        ChatMode::Assistant => COLOR_ACCENT,
        ChatMode::Simulation => COLOR_SIMULATION,
    }
}

/// Render a chat panel. Returns the largest useful transcript scroll.
pub fn render_chat(frame: &mut Frame, area: Rect, panel: &ChatPanel, tick: u64) -> u16 {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [header_area, transcript_area, input_area, disclaimer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    render_header(frame, header_area, panel);
    let max_scroll = render_transcript(frame, transcript_area, panel, tick);

    let input = InputLineWidget::new(panel.input(), panel.placeholder())
        .enabled(!panel.is_loading())
        .accent(accent(panel.mode()));
    frame.render_widget(input, input_area);

    frame.render_widget(
        Paragraph::new(Span::styled(AI_DISCLAIMER, Style::default().fg(COLOR_DIM)))
            .alignment(Alignment::Center),
        disclaimer_area,
    );
    max_scroll
}

fn render_header(frame: &mut Frame, area: Rect, panel: &ChatPanel) {
    let mode = panel.mode();
    let mut title = vec![
        Span::styled("◉ ", Style::default().fg(accent(mode))),
        Span::styled(
            mode.title(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
    ];
    if panel.can_reset() {
        title.push(Span::styled(
            "   ⟳ Reiniciar chat (Ctrl+R)",
            Style::default().fg(COLOR_DIM),
        ));
    }
    let header = Paragraph::new(vec![
        Line::from(title),
        Line::from(Span::styled(mode.subtitle(), Style::default().fg(COLOR_DIM))),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(header, area);
}

fn speaker(message: &ChatMessage, mode: ChatMode) -> (&'static str, Color) {
    if message.is_user() {
        ("Tú", COLOR_USER)
    } else if message.is_error {
        ("Error", COLOR_ERROR)
    } else {
        match mode {
            ChatMode::Assistant => ("JusticiaAI", COLOR_MODEL),
            ChatMode::Simulation => ("Juez", COLOR_SIMULATION),
        }
    }
}

/// Styled transcript lines, without the typing indicator.
pub fn transcript_lines(panel: &ChatPanel) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for message in panel.messages() {
        let (name, color) = speaker(message, panel.mode());
        lines.push(Line::from(vec![
            Span::styled(name, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" · {}", message.time_label()), Style::default().fg(COLOR_DIM)),
        ]));
        if message.is_error {
            lines.push(Line::from(Span::styled(
                format!("⚠ {}", message.text),
                Style::default().fg(COLOR_ERROR),
            )));
        } else if message.is_user() {
            for part in message.text.split('\n') {
                lines.push(Line::from(Span::styled(
                    part.to_string(),
                    Style::default().fg(COLOR_HEADER),
                )));
            }
        } else if !message.text.is_empty() {
            lines.extend(render_markdown_with_style(
                &message.text,
                Style::default().fg(COLOR_TEXT),
            ));
        }
        lines.push(Line::default());
    }
    lines
}

fn render_transcript(frame: &mut Frame, area: Rect, panel: &ChatPanel, tick: u64) -> u16 {
    if panel.messages().is_empty() && !panel.is_loading() {
        let hint = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled("◉", Style::default().fg(COLOR_BORDER))),
            Line::from(Span::styled(EMPTY_CHAT_HINT, Style::default().fg(COLOR_DIM))),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(hint, area);
        return 0;
    }

    let mut lines = transcript_lines(panel);
    if panel.is_loading() {
        let color = match panel.mode() {
            ChatMode::Assistant => COLOR_MODEL,
            ChatMode::Simulation => COLOR_SIMULATION,
        };
        lines.push(Line::from(Span::styled(
            spinner_frame(tick),
            Style::default().fg(color),
        )));
    }

    let total = estimate_wrapped_line_count(&lines, area.width as usize);
    let max_scroll = total.saturating_sub(area.height as usize) as u16;
    let from_bottom = panel.scroll().min(max_scroll);
    let top = max_scroll - from_bottom;

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((top, 0)),
        area,
    );
    max_scroll
}
