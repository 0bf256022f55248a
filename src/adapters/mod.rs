//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`GeminiBackend`] - Sessions backed by the Gemini streaming REST API
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockChatBackend`] - Scripted replies and recorded sends

pub mod gemini;
pub mod mock;

pub use gemini::GeminiBackend;
pub use mock::{MockChatBackend, MockReply};
