//! Conversation data shared by the chat screens and the model adapters.

mod message;

pub use message::{ChatMessage, Role, GREETING_ID};
