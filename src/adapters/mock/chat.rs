//! Scripted chat backend for testing.
//!
//! Replies are queued up front and consumed one per send, across all
//! sessions of the backend. Every send is recorded for verification.

use async_trait::async_trait;
use futures::stream;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::ChatError;
use crate::models::Role;
use crate::traits::{ChatBackend, ChatSession, FragmentStream, SessionHandle, SessionId};

/// What the next send should do.
#[derive(Debug, Clone, PartialEq)]
pub enum MockReply {
    /// Stream these fragments, then finish
    Fragments(Vec<String>),
    /// Fail before any stream is returned
    FailToOpen(String),
    /// Stream some fragments, then yield an error
    FailMidStream {
        fragments: Vec<String>,
        error: String,
    },
}

impl MockReply {
    pub fn fragments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockReply::Fragments(fragments.into_iter().map(Into::into).collect())
    }
}

/// A recorded send for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSend {
    pub session: SessionId,
    pub persona: String,
    pub message: String,
    /// Committed turns the session had when the message was sent
    pub history: Vec<(Role, String)>,
}

#[derive(Debug, Default)]
struct MockState {
    replies: VecDeque<MockReply>,
    sends: Vec<RecordedSend>,
    sessions: Vec<(SessionId, String)>,
}

/// Mock chat backend for testing.
///
/// # Example
///
/// ```ignore
/// use justicia::adapters::mock::{MockChatBackend, MockReply};
///
/// let backend = MockChatBackend::new();
/// backend.push_reply(MockReply::fragments(["Hola", " Mundo"]));
/// let session = backend.create_session("persona");
/// // ... send through the session ...
/// assert_eq!(backend.sends().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockChatBackend {
    model: String,
    state: Arc<Mutex<MockState>>,
}

impl MockChatBackend {
    pub fn new() -> Self {
        Self::with_model("mock-model")
    }

    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Queue a reply. When the queue is empty, sends stream nothing and finish.
    pub fn push_reply(&self, reply: MockReply) {
        self.state.lock().unwrap().replies.push_back(reply);
    }

    /// All sends made through any session of this backend.
    pub fn sends(&self) -> Vec<RecordedSend> {
        self.state.lock().unwrap().sends.clone()
    }

    /// Sessions created so far, with their personas.
    pub fn sessions(&self) -> Vec<(SessionId, String)> {
        self.state.lock().unwrap().sessions.clone()
    }
}

impl Default for MockChatBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatBackend for MockChatBackend {
    fn create_session(&self, persona: &str) -> SessionHandle {
        let id = SessionId::next();
        self.state
            .lock()
            .unwrap()
            .sessions
            .push((id, persona.to_string()));
        Arc::new(MockChatSession {
            id,
            persona: persona.to_string(),
            history: Arc::new(Mutex::new(Vec::new())),
            state: Arc::clone(&self.state),
        })
    }

    fn model(&self) -> &str {
        &self.model
    }
}

struct MockChatSession {
    id: SessionId,
    persona: String,
    history: Arc<Mutex<Vec<(Role, String)>>>,
    state: Arc<Mutex<MockState>>,
}

#[async_trait]
impl ChatSession for MockChatSession {
    fn id(&self) -> SessionId {
        self.id
    }

    fn persona(&self) -> &str {
        &self.persona
    }

    async fn send_message_stream(&self, message: &str) -> Result<FragmentStream, ChatError> {
        let reply = {
            let mut state = self.state.lock().unwrap();
            state.sends.push(RecordedSend {
                session: self.id,
                persona: self.persona.clone(),
                message: message.to_string(),
                history: self.history.lock().unwrap().clone(),
            });
            state
                .replies
                .pop_front()
                .unwrap_or(MockReply::Fragments(Vec::new()))
        };

        match reply {
            MockReply::FailToOpen(error) => Err(ChatError::Scripted(error)),
            MockReply::Fragments(fragments) => {
                // Commit up front: the stream is known to complete
                let full: String = fragments.concat();
                let mut history = self.history.lock().unwrap();
                history.push((Role::User, message.to_string()));
                history.push((Role::Model, full));
                Ok(Box::pin(stream::iter(
                    fragments.into_iter().map(Ok::<String, ChatError>),
                )))
            }
            MockReply::FailMidStream { fragments, error } => {
                let items = fragments
                    .into_iter()
                    .map(Ok)
                    .chain(std::iter::once(Err(ChatError::Scripted(error))));
                Ok(Box::pin(stream::iter(items)))
            }
        }
    }
}
