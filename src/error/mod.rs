//! Error types.
//!
//! - [`ChatError`] - Anything that can go wrong while exchanging a message with
//!   the model. Every variant ends the same way for the user: one flagged
//!   apology in the transcript.
//! - [`ConfigError`] - Start-up configuration problems, reported before the
//!   terminal enters raw mode.

mod chat;
mod config;

pub use chat::ChatError;
pub use config::ConfigError;
