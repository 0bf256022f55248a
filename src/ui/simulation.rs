//! Simulation screen: scenario catalog, or the running hearing.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::content::scenarios::{Scenario, SCENARIOS};
use crate::state::SimulationState;

use super::chat::render_chat;
use super::helpers::difficulty_badge;
use super::layout::{center_horizontally, LayoutContext};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SIMULATION, COLOR_TEXT};

/// Render the Simulation view. Returns the chat's largest useful scroll.
pub fn render_simulation(
    frame: &mut Frame,
    area: Rect,
    simulation: &SimulationState,
    tick: u64,
    ctx: &LayoutContext,
) -> u16 {
    match simulation.selected() {
        Some(scenario) if !simulation.in_catalog() => {
            let [header_area, chat_area] =
                Layout::vertical([Constraint::Length(6), Constraint::Min(8)]).areas(area);
            render_hearing_header(frame, header_area, scenario);
            render_chat(frame, chat_area, &simulation.chat, tick)
        }
        _ => {
            render_catalog(frame, area, simulation.cursor(), ctx);
            0
        }
    }
}

fn render_hearing_header(frame: &mut Frame, area: Rect, scenario: &Scenario) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "← Volver a escenarios (Esc)",
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(vec![
            Span::styled("⚖ ", Style::default().fg(COLOR_SIMULATION)),
            Span::styled(
                scenario.title,
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            difficulty_badge(scenario.difficulty),
        ]),
        Line::from(vec![
            Span::styled("│ ", Style::default().fg(COLOR_SIMULATION)),
            Span::styled(scenario.description, Style::default().fg(COLOR_TEXT)),
        ]),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(header, area);
}

fn render_catalog(frame: &mut Frame, area: Rect, cursor: usize, ctx: &LayoutContext) {
    let area = center_horizontally(area, 110);
    let [title_area, cards_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Simulador de Audiencias",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Pon a prueba tus conocimientos en escenarios prácticos controlados por IA.",
            Style::default().fg(COLOR_TEXT),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(title, title_area);

    let card_areas: Vec<Rect> = if ctx.cards_in_row() {
        Layout::horizontal([Constraint::Ratio(1, 3); 3])
            .spacing(1)
            .split(cards_area)
            .to_vec()
    } else {
        Layout::vertical(SCENARIOS.iter().map(|_| Constraint::Length(7)))
            .split(cards_area)
            .to_vec()
    };
    for (i, (scenario, card_area)) in SCENARIOS.iter().zip(card_areas).enumerate() {
        render_card(frame, card_area, scenario, i, i == cursor);
    }
}

fn render_card(frame: &mut Frame, area: Rect, scenario: &Scenario, index: usize, selected: bool) {
    let border = if selected { COLOR_SIMULATION } else { COLOR_BORDER };
    let button = if selected {
        Span::styled(
            " ▶ Iniciar Simulación (Enter) ",
            Style::default()
                .fg(Color::White)
                .bg(COLOR_SIMULATION)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(" ▶ Iniciar Simulación ", Style::default().fg(COLOR_SIMULATION))
    };
    let body = Paragraph::new(vec![
        Line::from(difficulty_badge(scenario.difficulty)),
        Line::from(Span::styled(
            scenario.title,
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(scenario.description, Style::default().fg(COLOR_TEXT))),
        Line::default(),
        Line::from(button),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                format!(" {} ", index + 1),
                Style::default().fg(COLOR_DIM),
            )),
    );
    frame.render_widget(body, area);
}
