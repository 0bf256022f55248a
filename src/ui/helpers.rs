//! Helper functions for UI rendering

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::content::scenarios::Difficulty;

use super::theme::{COLOR_ADVANCED, COLOR_BEGINNER, COLOR_INTERMEDIATE};

const SPINNER_FRAMES: [&str; 4] = ["●○○", "○●○", "○○●", "○●○"];

/// Typing indicator frame for the given tick (16ms ticks).
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[((tick / 8) % SPINNER_FRAMES.len() as u64) as usize]
}

/// Badge color for a scenario difficulty.
pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Principiante => COLOR_BEGINNER,
        Difficulty::Intermedio => COLOR_INTERMEDIATE,
        Difficulty::Avanzado => COLOR_ADVANCED,
    }
}

/// `[ Intermedio ]` badge span.
pub fn difficulty_badge(difficulty: Difficulty) -> Span<'static> {
    Span::styled(
        format!("[ {} ]", difficulty.label()),
        Style::default().fg(difficulty_color(difficulty)),
    )
}

/// Estimate how many rows `lines` take when wrapped to `viewport_width`.
///
/// Word wrapping can push a few more rows than this, so callers treat it
/// as a lower bound.
pub fn estimate_wrapped_line_count(lines: &[Line], viewport_width: usize) -> usize {
    if viewport_width == 0 {
        return lines.len();
    }
    lines
        .iter()
        .map(|line| {
            let width: usize = line.spans.iter().map(|s| s.content.width()).sum();
            if width == 0 {
                1
            } else {
                width.div_ceil(viewport_width)
            }
        })
        .sum()
}

/// Cut `text` to `max` columns, ending with `…` when cut.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_wrapped_line_count() {
        let lines = vec![Line::from("abcdefghij"), Line::from(""), Line::from("abc")];
        assert_eq!(estimate_wrapped_line_count(&lines, 5), 2 + 1 + 1);
        assert_eq!(estimate_wrapped_line_count(&lines, 0), 3);
    }

    #[test]
    fn test_estimate_counts_accents_as_one_column() {
        let lines = vec![Line::from("audiencia pública")];
        assert_eq!(estimate_wrapped_line_count(&lines, 17), 1);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Amparo", 10), "Amparo");
        assert_eq!(truncate_to_width("Formulación", 6), "Formu…");
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), spinner_frame(32));
        assert_ne!(spinner_frame(0), spinner_frame(8));
    }

    #[test]
    fn test_difficulty_colors_differ() {
        assert_ne!(
            difficulty_color(Difficulty::Principiante),
            difficulty_color(Difficulty::Avanzado)
        );
        assert!(difficulty_badge(Difficulty::Intermedio)
            .content
            .contains("Intermedio"));
    }
}
