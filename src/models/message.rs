use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id given to the greeting that seeds a fresh transcript.
pub const GREETING_ID: &str = "init";

/// Author of a message.
///
/// Serialized with the lowercase names the Gemini API uses for content roles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One entry of a chat transcript.
///
/// Messages are created on send or when a reply stream opens, grow only by
/// appending streamed text, and live exactly as long as their transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Local>,
    /// Set on the apology appended when a reply fails
    pub is_error: bool,
}

impl ChatMessage {
    fn new(id: String, role: Role, text: impl Into<String>) -> Self {
        Self {
            id,
            role,
            text: text.into(),
            timestamp: Local::now(),
            is_error: false,
        }
    }

    /// Message typed by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4().to_string(), Role::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4().to_string(), Role::Model, text)
    }

    /// Opening model message of a fresh transcript, with id [`GREETING_ID`].
    pub fn greeting(text: impl Into<String>) -> Self {
        Self::new(GREETING_ID.to_string(), Role::Model, text)
    }

    /// Model message flagged as a failed reply.
    pub fn error(text: impl Into<String>) -> Self {
        let mut message = Self::model(text);
        message.is_error = true;
        message
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    /// Append a streamed fragment.
    pub fn append(&mut self, fragment: &str) {
        self.text.push_str(fragment);
    }

    /// Timestamp formatted for the transcript, e.g. `14:05`.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}
