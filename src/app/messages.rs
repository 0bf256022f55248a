//! AppMessage enum for async communication within the application.

use crate::error::ChatError;
use crate::state::ChatId;

/// Messages sent from reply tasks back to the UI loop.
///
/// Every variant names the panel generation that started the reply, so
/// results for a discarded transcript can be dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// The reply stream opened; the panel should add its placeholder
    StreamStarted { chat_id: ChatId },
    /// A non-empty piece of reply text
    StreamFragment { chat_id: ChatId, text: String },
    /// The request or the stream failed
    StreamFailed { chat_id: ChatId, error: ChatError },
    /// The stream ended normally
    StreamFinished { chat_id: ChatId },
}

impl AppMessage {
    /// Transcript generation the message belongs to.
    pub fn chat_id(&self) -> ChatId {
        match self {
            AppMessage::StreamStarted { chat_id }
            | AppMessage::StreamFragment { chat_id, .. }
            | AppMessage::StreamFailed { chat_id, .. }
            | AppMessage::StreamFinished { chat_id } => *chat_id,
        }
    }
}
