//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`ChatBackend`] - Creates conversation sessions bound to a persona
//! - [`ChatSession`] - Sends a message and streams the reply back as text fragments

pub mod chat;

pub use chat::{ChatBackend, ChatSession, FragmentStream, SessionHandle, SessionId};
