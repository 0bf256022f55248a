//! Chat panel state shared by the legal assistant and the simulations.
//!
//! A panel owns the visible transcript, the input line and the loading
//! flag. It never talks to the network: [`ChatPanel::begin_send`] hands
//! the session and text to the caller, which drives the request and feeds
//! results back through [`ChatPanel::stream_started`],
//! [`ChatPanel::apply_fragment`], [`ChatPanel::fail`] and
//! [`ChatPanel::finish`].

use std::sync::atomic::{AtomicU64, Ordering};

use crate::content::texts::REPLY_FAILED;
use crate::models::ChatMessage;
use crate::traits::{SessionHandle, SessionId};
use crate::widgets::InputLine;

static NEXT_CHAT_ID: AtomicU64 = AtomicU64::new(1);

/// Generation tag of a panel's transcript.
///
/// Changes whenever the transcript is discarded, so stream messages that
/// were started for an older transcript can be recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChatId(u64);

impl ChatId {
    /// Allocate the next id. Ids are unique for the life of the process.
    pub fn next() -> Self {
        ChatId(NEXT_CHAT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for ChatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "chat-{}", self.0)
    }
}

/// Presentation flavour of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMode {
    Assistant,
    Simulation,
}

impl ChatMode {
    /// Header title of the panel.
    pub fn title(&self) -> &'static str {
        match self {
            ChatMode::Assistant => "Asistente Legal",
            ChatMode::Simulation => "Juez de Control (IA)",
        }
    }

    /// Line under the title.
    pub fn subtitle(&self) -> &'static str {
        match self {
            ChatMode::Assistant => "Responde sobre el sistema acusatorio",
            ChatMode::Simulation => "Simulando audiencia",
        }
    }
}

/// One chat transcript with its input line.
///
/// Used for the assistant chat and the hearing of a simulation. The panel
/// holds an optional session; without one it shows no input target and
/// [`ChatPanel::begin_send`] refuses to send.
pub struct ChatPanel {
    id: ChatId,
    mode: ChatMode,
    placeholder: &'static str,
    can_reset: bool,
    greeting: Option<&'static str>,
    session: Option<SessionHandle>,
    messages: Vec<ChatMessage>,
    input: InputLine,
    loading: bool,
    /// Id of the model message the current reply streams into
    streaming: Option<String>,
    /// Lines scrolled up from the bottom of the transcript
    scroll: u16,
}

impl ChatPanel {
    /// Empty, unbound panel.
    ///
    /// `can_reset` only controls whether the header advertises Ctrl+R.
    pub fn new(mode: ChatMode, placeholder: &'static str, can_reset: bool) -> Self {
        Self {
            id: ChatId::next(),
            mode,
            placeholder,
            can_reset,
            greeting: None,
            session: None,
            messages: Vec::new(),
            input: InputLine::new(),
            loading: false,
            streaming: None,
            scroll: 0,
        }
    }

    /// Attach a session and greeting.
    ///
    /// When either differs from what the panel holds, the transcript is
    /// replaced by the greeting alone (or emptied) and the panel gets a new
    /// [`ChatId`]. Rebinding the same pair keeps everything.
    pub fn bind(&mut self, session: Option<SessionHandle>, greeting: Option<&'static str>) {
        let old_id = self.session.as_ref().map(|s| s.id());
        let new_id = session.as_ref().map(|s| s.id());
        if old_id == new_id && self.greeting == greeting {
            return;
        }
        self.session = session;
        self.greeting = greeting;
        self.restart();
    }

    fn restart(&mut self) {
        self.id = ChatId::next();
        self.messages = self
            .greeting
            .map(|text| vec![ChatMessage::greeting(text)])
            .unwrap_or_default();
        self.loading = false;
        self.streaming = None;
        self.scroll = 0;
        self.input.clear();
    }

    /// Start a send with the current input.
    ///
    /// Returns `None` without touching anything when the input is blank,
    /// there is no session, or a reply is already loading.
    pub fn begin_send(&mut self) -> Option<(SessionHandle, String)> {
        if self.loading || self.input.is_blank() {
            return None;
        }
        let session = self.session.clone()?;
        let text = self.input.take();
        self.messages.push(ChatMessage::user(text.clone()));
        self.loading = true;
        self.scroll = 0;
        Some((session, text))
    }

    /// Append the empty model message that fragments will fill in.
    pub fn stream_started(&mut self) -> String {
        let placeholder = ChatMessage::model(String::new());
        let id = placeholder.id.clone();
        self.messages.push(placeholder);
        self.streaming = Some(id.clone());
        self.scroll = 0;
        id
    }

    /// Id of the message the in-flight reply is filling, if it has started.
    pub fn streaming_id(&self) -> Option<&str> {
        self.streaming.as_deref()
    }

    /// Append a streamed fragment to the message with `message_id`.
    ///
    /// Empty fragments and unknown ids are ignored. Any new text scrolls the
    /// transcript back to the bottom.
    pub fn apply_fragment(&mut self, message_id: &str, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(message) = self.messages.iter_mut().rev().find(|m| m.id == message_id) {
            message.append(text);
            self.scroll = 0;
        }
    }

    /// Record a failed reply as one flagged apology.
    pub fn fail(&mut self) {
        self.messages.push(ChatMessage::error(REPLY_FAILED));
        self.scroll = 0;
    }

    /// End the in-flight reply, after success or failure.
    ///
    /// Clears the loading flag so the input accepts typing again.
    pub fn finish(&mut self) {
        self.loading = false;
        self.streaming = None;
    }

    /// Scroll towards older messages.
    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    /// Scroll towards the newest message.
    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Clamp the scroll offset to what the transcript can actually scroll.
    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll = self.scroll.min(max);
    }

    /// Current transcript generation.
    pub fn id(&self) -> ChatId {
        self.id
    }

    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn can_reset(&self) -> bool {
        self.can_reset
    }

    /// Session the panel sends to, if bound.
    pub fn session(&self) -> Option<&SessionHandle> {
        self.session.as_ref()
    }

    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(|s| s.id())
    }

    /// Transcript in display order, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    /// Mutable input, or `None` while a reply is loading.
    pub fn input_mut(&mut self) -> Option<&mut InputLine> {
        if self.loading {
            None
        } else {
            Some(&mut self.input)
        }
    }

    /// True from a send until its reply finishes or fails.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Lines scrolled up from the bottom.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockChatBackend;
    use crate::models::{Role, GREETING_ID};
    use crate::traits::ChatBackend;

    const GREETING: &str = "Hola, ¿en qué puedo ayudarte?";

    fn type_text(panel: &mut ChatPanel, text: &str) {
        let input = panel.input_mut().unwrap();
        for c in text.chars() {
            input.insert_char(c);
        }
    }

    fn bound_panel(backend: &MockChatBackend) -> ChatPanel {
        let mut panel = ChatPanel::new(ChatMode::Assistant, "Escribe...", true);
        panel.bind(Some(backend.create_session("p")), Some(GREETING));
        panel
    }

    #[test]
    fn test_bind_seeds_greeting() {
        let backend = MockChatBackend::new();
        let panel = bound_panel(&backend);
        assert_eq!(panel.messages().len(), 1);
        assert_eq!(panel.messages()[0].id, GREETING_ID);
        assert_eq!(panel.messages()[0].role, Role::Model);
        assert_eq!(panel.messages()[0].text, GREETING);
    }

    #[test]
    fn test_bind_without_greeting_is_empty() {
        let backend = MockChatBackend::new();
        let mut panel = ChatPanel::new(ChatMode::Simulation, "x", false);
        panel.bind(Some(backend.create_session("p")), None);
        assert!(panel.messages().is_empty());
    }

    #[test]
    fn test_rebinding_same_session_keeps_transcript() {
        let backend = MockChatBackend::new();
        let mut panel = bound_panel(&backend);
        let session = panel.session().cloned();
        type_text(&mut panel, "hola");
        panel.begin_send().unwrap();
        let id = panel.id();

        panel.bind(session, Some(GREETING));
        assert_eq!(panel.messages().len(), 2);
        assert_eq!(panel.id(), id);
    }

    #[test]
    fn test_new_session_resets_transcript_and_id() {
        let backend = MockChatBackend::new();
        let mut panel = bound_panel(&backend);
        type_text(&mut panel, "hola");
        panel.begin_send().unwrap();
        let id = panel.id();

        panel.bind(Some(backend.create_session("p")), Some(GREETING));
        assert_eq!(panel.messages().len(), 1);
        assert_ne!(panel.id(), id);
        assert!(!panel.is_loading());
    }

    #[test]
    fn test_begin_send_blank_is_noop() {
        let backend = MockChatBackend::new();
        let mut panel = bound_panel(&backend);
        type_text(&mut panel, "   ");
        assert!(panel.begin_send().is_none());
        assert_eq!(panel.messages().len(), 1);
        assert!(!panel.is_loading());
    }

    #[test]
    fn test_begin_send_without_session_is_noop() {
        let mut panel = ChatPanel::new(ChatMode::Assistant, "x", false);
        type_text(&mut panel, "hola");
        assert!(panel.begin_send().is_none());
        assert!(panel.messages().is_empty());
    }

    #[test]
    fn test_begin_send_appends_user_message_verbatim() {
        let backend = MockChatBackend::new();
        let mut panel = bound_panel(&backend);
        type_text(&mut panel, " ¿Qué es? ");
        let (_, text) = panel.begin_send().unwrap();
        assert_eq!(text, " ¿Qué es? ");
        let last = panel.messages().last().unwrap();
        assert_eq!(last.role, Role::User);
        assert_eq!(last.text, " ¿Qué es? ");
        assert!(panel.input().is_empty());
        assert!(panel.is_loading());
    }

    #[test]
    fn test_input_locked_while_loading() {
        let backend = MockChatBackend::new();
        let mut panel = bound_panel(&backend);
        type_text(&mut panel, "uno");
        panel.begin_send().unwrap();
        assert!(panel.input_mut().is_none());
        assert!(panel.begin_send().is_none());
    }

    #[test]
    fn test_fragments_accumulate() {
        let backend = MockChatBackend::new();
        let mut panel = bound_panel(&backend);
        type_text(&mut panel, "hola");
        panel.begin_send().unwrap();
        let id = panel.stream_started();
        assert_eq!(panel.streaming_id(), Some(id.as_str()));
        assert_eq!(panel.messages().last().unwrap().text, "");
        panel.apply_fragment(&id, "Hola");
        assert_eq!(panel.messages().last().unwrap().text, "Hola");
        panel.apply_fragment(&id, "");
        panel.apply_fragment(&id, " Mundo");
        assert_eq!(panel.messages().last().unwrap().text, "Hola Mundo");
        panel.finish();
        assert!(!panel.is_loading());
        assert!(panel.streaming_id().is_none());
    }

    #[test]
    fn test_fail_appends_flagged_apology() {
        let backend = MockChatBackend::new();
        let mut panel = bound_panel(&backend);
        type_text(&mut panel, "hola");
        panel.begin_send().unwrap();
        panel.fail();
        panel.finish();
        let last = panel.messages().last().unwrap();
        assert!(last.is_error);
        assert_eq!(last.role, Role::Model);
        assert_eq!(last.text, REPLY_FAILED);
        assert_eq!(panel.messages().len(), 3);
        assert!(!panel.is_loading());
    }

    #[test]
    fn test_scroll_snaps_on_new_content() {
        let backend = MockChatBackend::new();
        let mut panel = bound_panel(&backend);
        panel.scroll_up(5);
        assert_eq!(panel.scroll(), 5);
        panel.scroll_down(2);
        assert_eq!(panel.scroll(), 3);
        panel.clamp_scroll(1);
        assert_eq!(panel.scroll(), 1);
        panel.fail();
        assert_eq!(panel.scroll(), 0);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(ChatMode::Assistant.title(), "Asistente Legal");
        assert_eq!(ChatMode::Simulation.title(), "Juez de Control (IA)");
        assert_eq!(ChatMode::Simulation.subtitle(), "Simulando audiencia");
    }
}
