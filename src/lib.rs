//! Justicia - a terminal study companion for the Spanish accusatory
//! criminal procedure system.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod markdown;
pub mod models;
pub mod session;
pub mod sse;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod widgets;
