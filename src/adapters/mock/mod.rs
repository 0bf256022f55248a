//! Mock implementations for testing.
//!
//! This module provides a scripted chat collaborator, enabling tests of the
//! chat screens without network access.
//!
//! # Available Mocks
//!
//! - [`MockChatBackend`] - Session factory with queued replies and recorded sends

pub mod chat;

pub use chat::{MockChatBackend, MockReply, RecordedSend};
