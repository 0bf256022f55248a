//! Home screen.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, HOME_CARDS};
use crate::content::texts::{APP_TITLE, CREDITS};

use super::layout::{center_horizontally, LayoutContext};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};

const INTRO: &str = "Una plataforma integral para estudiantes y profesionales del derecho. \
Aprende los principios, domina las etapas procesales y practica tus habilidades \
de litigación con inteligencia artificial.";

const NEWCOMER: &str = "El Sistema Penal Acusatorio se basa en la oralidad, publicidad, \
contradicción, concentración, continuidad e inmediación. Empieza por conocer los \
fundamentos antes de pasar a la práctica.";

struct Card {
    title: &'static str,
    body: &'static str,
    action: &'static str,
    color: Color,
}

const CARDS: [Card; HOME_CARDS] = [
    Card {
        title: "Biblioteca Legal",
        body: "Explora temas desde principios rectores hasta medios de impugnación.",
        action: "Comenzar a leer →",
        color: Color::Rgb(96, 165, 250),
    },
    Card {
        title: "Asistente IA",
        body: "Resuelve dudas específicas sobre procedimientos y artículos en tiempo real.",
        action: "Consultar ahora →",
        color: Color::Rgb(192, 132, 252),
    },
    Card {
        title: "Simulador de Audiencia",
        body: "Roleplay interactivo donde la IA actúa como Juez o contraparte.",
        action: "Iniciar simulación →",
        color: Color::Rgb(52, 211, 153),
    },
];

/// Render the Home view: title, the three cards and the getting-started panel.
pub fn render_home(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let area = center_horizontally(area, 110);
    let card_rows = if ctx.cards_in_row() { 7 } else { 5 * HOME_CARDS as u16 };
    let [header_area, cards_area, newcomer_area, credits_area] = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(card_rows),
        Constraint::Length(6),
        Constraint::Min(1),
    ])
    .areas(area);

    let header = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled("⚖", Style::default().fg(COLOR_ACCENT))),
        Line::from(Span::styled(
            APP_TITLE,
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(INTRO, Style::default().fg(COLOR_TEXT))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(header, header_area);

    let card_areas: Vec<Rect> = if ctx.cards_in_row() {
        Layout::horizontal([Constraint::Ratio(1, 3); HOME_CARDS])
            .spacing(1)
            .split(cards_area)
            .to_vec()
    } else {
        Layout::vertical([Constraint::Length(5); HOME_CARDS])
            .split(cards_area)
            .to_vec()
    };
    for (i, (card, card_area)) in CARDS.iter().zip(card_areas).enumerate() {
        render_card(frame, card_area, card, i, i == app.home_cursor);
    }

    let newcomer = Paragraph::new(vec![
        Line::from(Span::styled(
            "¿Nuevo en el sistema?",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(NEWCOMER, Style::default().fg(COLOR_TEXT))),
        Line::from(vec![
            Span::styled(
                " Ir al Temario ",
                Style::default()
                    .fg(Color::Black)
                    .bg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (t)", Style::default().fg(COLOR_DIM)),
        ]),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(newcomer, newcomer_area);

    let credits = Paragraph::new(Line::from(vec![
        Span::styled("Desarrollado por ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            CREDITS.to_uppercase(),
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(credits, credits_area);
}

fn render_card(frame: &mut Frame, area: Rect, card: &Card, index: usize, selected: bool) {
    let border = if selected { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {} ", index + 1),
            Style::default().fg(COLOR_DIM),
        ));
    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            card.title,
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(card.body, Style::default().fg(COLOR_TEXT))),
        Line::from(Span::styled(card.action, Style::default().fg(card.color))),
    ])
    .wrap(Wrap { trim: true })
    .block(block);
    frame.render_widget(body, area);
}
