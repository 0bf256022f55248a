//! Color theme constants
//!
//! A dark palette with a warm amber accent for the legal look.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for titles, the active view and highlighted cards
pub const COLOR_ACCENT: Color = Color::Rgb(245, 158, 11);

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Body text
pub const COLOR_TEXT: Color = Color::Gray;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// User message label
pub const COLOR_USER: Color = Color::Rgb(96, 165, 250);

/// Model message label on the assistant chat
pub const COLOR_MODEL: Color = Color::Rgb(245, 158, 11);

/// Simulation accent (indigo)
pub const COLOR_SIMULATION: Color = Color::Rgb(129, 140, 248);

/// Failed reply text
pub const COLOR_ERROR: Color = Color::Rgb(248, 113, 113);

/// "Potenciado por Gemini" box
pub const COLOR_GEMINI: Color = Color::Rgb(147, 197, 253);

// ============================================================================
// Difficulty badges
// ============================================================================

pub const COLOR_BEGINNER: Color = Color::Rgb(74, 222, 128);

pub const COLOR_INTERMEDIATE: Color = Color::Rgb(250, 204, 21);

pub const COLOR_ADVANCED: Color = Color::Rgb(248, 113, 113);
