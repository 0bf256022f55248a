//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`View`] - Which screen is currently displayed
//! - [`AppMessage`] - Messages from reply tasks to the UI loop

mod handlers;
mod keys;
mod messages;
mod navigation;
mod stream;
mod types;

pub use messages::AppMessage;
pub use stream::run_reply;
pub use types::View;

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::content::texts::DEFAULT_PLACEHOLDER;
use crate::state::{ChatId, ChatMode, ChatPanel, LibraryState, SimulationState};
use crate::traits::{ChatBackend, SessionHandle};

/// Number of cards on the home screen.
pub const HOME_CARDS: usize = 3;

/// Main application state.
pub struct App {
    /// Currently displayed view
    view: View,
    /// Factory for new chat sessions
    backend: Arc<dyn ChatBackend>,
    /// Legal assistant session, created on the first visit to Chat
    assistant_session: Option<SessionHandle>,
    /// Transcript shown on the Chat view
    pub assistant_chat: ChatPanel,
    /// Learn view selection
    pub library: LibraryState,
    /// Simulation view catalog and hearing
    pub simulation: SimulationState,
    /// Highlighted card on the home screen
    pub home_cursor: usize,
    /// Flag to indicate if the app should quit
    pub should_quit: bool,
    /// Set when visible state changed since the last draw
    pub needs_redraw: bool,
    /// Tick counter for animations (spinner)
    pub tick_count: u64,
    /// Receiver for reply messages, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for reply messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// Create the app on the Home view.
    ///
    /// No session exists yet: the assistant session is created on the first
    /// visit to Chat, simulation sessions when a scenario starts.
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            view: View::default(),
            backend,
            assistant_session: None,
            assistant_chat: new_assistant_panel(),
            library: LibraryState::new(),
            simulation: SimulationState::new(),
            home_cursor: 0,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
        }
    }

    /// Currently displayed view. Change it with [`App::set_view`].
    pub fn view(&self) -> View {
        self.view
    }

    /// Session factory shared by every chat.
    pub fn backend(&self) -> &dyn ChatBackend {
        self.backend.as_ref()
    }

    /// Model name shown in the sidebar.
    pub fn model(&self) -> &str {
        self.backend.model()
    }

    /// Legal assistant session, once Chat has been opened.
    pub fn assistant_session(&self) -> Option<&SessionHandle> {
        self.assistant_session.as_ref()
    }

    /// The chat that receives typing on the current view, if any.
    pub fn active_panel(&self) -> Option<&ChatPanel> {
        match self.view {
            View::Chat => Some(&self.assistant_chat),
            View::Simulation if !self.simulation.in_catalog() => Some(&self.simulation.chat),
            _ => None,
        }
    }

    /// Mutable access to [`App::active_panel`].
    pub fn active_panel_mut(&mut self) -> Option<&mut ChatPanel> {
        match self.view {
            View::Chat => Some(&mut self.assistant_chat),
            View::Simulation if !self.simulation.in_catalog() => Some(&mut self.simulation.chat),
            _ => None,
        }
    }

    /// The live panel with this generation, if any.
    fn panel_by_id(&mut self, chat_id: ChatId) -> Option<&mut ChatPanel> {
        if self.assistant_chat.id() == chat_id {
            Some(&mut self.assistant_chat)
        } else if self.simulation.chat.id() == chat_id {
            Some(&mut self.simulation.chat)
        } else {
            None
        }
    }

    /// True while any chat waits on a reply.
    pub fn is_loading(&self) -> bool {
        self.assistant_chat.is_loading() || self.simulation.chat.is_loading()
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation counter. Called on every loop tick.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    /// Ask the event loop to exit after the current iteration.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

fn new_assistant_panel() -> ChatPanel {
    ChatPanel::new(ChatMode::Assistant, DEFAULT_PLACEHOLDER, true)
}
