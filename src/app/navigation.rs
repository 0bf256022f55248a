//! View switching for the App.

use tracing::info;

use crate::content::texts::ASSISTANT_GREETING;
use crate::session::create_legal_chat;

use super::{new_assistant_panel, App, View, HOME_CARDS};

impl App {
    /// Switch to `view`.
    ///
    /// The view being left drops its screen state: the assistant
    /// transcript, the simulation (with its session) and the library
    /// selection. The assistant session itself survives until reset.
    pub fn set_view(&mut self, view: View) {
        if view == self.view {
            return;
        }
        info!(from = ?self.view, to = ?view, "view changed");
        match self.view {
            View::Chat => self.assistant_chat = new_assistant_panel(),
            View::Simulation => self.simulation.reset(),
            View::Learn => self.library.reset(),
            View::Home => {}
        }
        self.view = view;
        if view == View::Chat {
            self.open_assistant();
        }
        self.mark_dirty();
    }

    /// Tab: go to the following view.
    pub fn next_view(&mut self) {
        self.set_view(self.view.next());
    }

    /// Shift+Tab: go to the preceding view.
    pub fn prev_view(&mut self) {
        self.set_view(self.view.prev());
    }

    /// Bind the assistant panel, creating the session on first use.
    fn open_assistant(&mut self) {
        let session = match &self.assistant_session {
            Some(session) => session.clone(),
            None => {
                let session = create_legal_chat(self.backend.as_ref());
                self.assistant_session = Some(session.clone());
                session
            }
        };
        self.assistant_chat
            .bind(Some(session), Some(ASSISTANT_GREETING));
    }

    /// Replace the assistant session with a fresh one of the same persona.
    ///
    /// The transcript goes back to the greeting alone.
    pub fn reset_assistant(&mut self) {
        let session = create_legal_chat(self.backend.as_ref());
        info!(session = %session.id(), "assistant reset");
        self.assistant_session = Some(session.clone());
        self.assistant_chat
            .bind(Some(session), Some(ASSISTANT_GREETING));
        self.mark_dirty();
    }

    /// Follow the home card at `index`.
    pub fn activate_home_card(&mut self, index: usize) {
        let view = match index {
            0 => View::Learn,
            1 => View::Chat,
            2 => View::Simulation,
            _ => return,
        };
        self.home_cursor = index;
        self.set_view(view);
    }

    /// Highlight the next home card, wrapping around.
    pub fn home_cursor_next(&mut self) {
        self.home_cursor = (self.home_cursor + 1) % HOME_CARDS;
        self.mark_dirty();
    }

    pub fn home_cursor_prev(&mut self) {
        self.home_cursor = (self.home_cursor + HOME_CARDS - 1) % HOME_CARDS;
        self.mark_dirty();
    }
}
