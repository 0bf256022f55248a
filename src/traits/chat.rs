//! Chat collaborator abstraction.
//!
//! The rest of the application only ever sees a [`SessionHandle`]: an opaque
//! capability that remembers its persona and conversation history and can
//! stream a reply to the next user message. The production implementation
//! talks to Gemini; tests use the scripted backend in `adapters::mock`.

use async_trait::async_trait;
use futures::Stream;
use std::fmt;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::ChatError;

/// A finite, non-restartable stream of reply fragments.
///
/// The first `Err` ends the exchange; callers stop polling after it.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String, ChatError>> + Send>>;

/// Shared handle to a live session. Owned by the screen that created it.
pub type SessionHandle = Arc<dyn ChatSession>;

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique session identity, used to notice when a screen's session
/// was replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    /// Allocate a fresh id.
    pub fn next() -> Self {
        Self(NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// A conversation with the model under a fixed persona.
///
/// History is kept by the implementation. An exchange is committed to the
/// history only when its reply stream completes without error.
#[async_trait]
pub trait ChatSession: Send + Sync {
    fn id(&self) -> SessionId;

    /// Persona instruction the session was created with.
    fn persona(&self) -> &str;

    /// Send `message` and stream the reply.
    ///
    /// Returns `Err` when the request fails before any reply starts (bad
    /// status, unreachable host). Failures after that surface as an `Err`
    /// item on the returned stream.
    async fn send_message_stream(&self, message: &str) -> Result<FragmentStream, ChatError>;
}

/// Factory for sessions against one model.
pub trait ChatBackend: Send + Sync {
    fn create_session(&self, persona: &str) -> SessionHandle;

    /// Name of the model sessions talk to, shown in the sidebar.
    fn model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ids_are_unique_and_increasing() {
        let a = SessionId::next();
        let b = SessionId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn test_session_id_display() {
        let id = SessionId::next();
        assert!(id.to_string().starts_with("session-"));
    }
}
