//! State of the Simulation screen: the scenario catalog and, once a
//! scenario is started, its hearing chat.

use tracing::info;

use crate::content::scenarios::{Scenario, SCENARIOS};
use crate::content::texts::{SIMULATION_GREETING, SIMULATION_PLACEHOLDER};
use crate::session::create_simulation_chat;
use crate::state::chat::{ChatMode, ChatPanel};
use crate::traits::{ChatBackend, SessionHandle};

/// State of the Simulation view.
///
/// In the catalog while no scenario is running. Starting a scenario creates
/// a session with the scenario's judge persona and binds [`Self::chat`] to it
/// with the hearing greeting; [`SimulationState::reset`] drops both.
pub struct SimulationState {
    selected: Option<&'static Scenario>,
    session: Option<SessionHandle>,
    pub chat: ChatPanel,
    /// Highlighted catalog card
    cursor: usize,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            selected: None,
            session: None,
            chat: ChatPanel::new(ChatMode::Simulation, SIMULATION_PLACEHOLDER, false),
            cursor: 0,
        }
    }
}

impl SimulationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a hearing for `scenario` with a fresh session.
    pub fn start(&mut self, scenario: &'static Scenario, backend: &dyn ChatBackend) {
        let session = create_simulation_chat(backend, scenario.system_instruction);
        info!(scenario = scenario.id, "simulation started");
        self.selected = Some(scenario);
        self.session = Some(session.clone());
        self.chat.bind(Some(session), Some(SIMULATION_GREETING));
    }

    /// Start the scenario under the catalog cursor.
    pub fn start_highlighted(&mut self, backend: &dyn ChatBackend) {
        let scenario = &SCENARIOS[self.cursor];
        self.start(scenario, backend);
    }

    /// Drop the session and go back to the catalog.
    pub fn reset(&mut self) {
        self.selected = None;
        self.session = None;
        self.chat.bind(None, None);
    }

    /// True while the scenario catalog is shown.
    pub fn in_catalog(&self) -> bool {
        self.selected.is_none() || self.session.is_none()
    }

    /// Scenario of the running hearing.
    pub fn selected(&self) -> Option<&'static Scenario> {
        self.selected
    }

    pub fn session(&self) -> Option<&SessionHandle> {
        self.session.as_ref()
    }

    /// Index of the highlighted catalog card.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Highlight the card at `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < SCENARIOS.len() {
            self.cursor = index;
        }
    }

    /// Highlight the next card, wrapping to the first.
    pub fn cursor_next(&mut self) {
        self.cursor = (self.cursor + 1) % SCENARIOS.len();
    }

    pub fn cursor_prev(&mut self) {
        self.cursor = (self.cursor + SCENARIOS.len() - 1) % SCENARIOS.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockChatBackend;

    #[test]
    fn test_starts_in_catalog() {
        let state = SimulationState::new();
        assert!(state.in_catalog());
        assert!(state.selected().is_none());
        assert!(state.chat.messages().is_empty());
    }

    #[test]
    fn test_start_creates_session_with_scenario_persona() {
        let backend = MockChatBackend::new();
        let mut state = SimulationState::new();
        state.start(&SCENARIOS[1], &backend);

        assert!(!state.in_catalog());
        assert_eq!(state.selected().unwrap().id, "formulacion-imputacion");
        assert_eq!(
            state.session().unwrap().persona(),
            SCENARIOS[1].system_instruction
        );
        assert_eq!(state.chat.messages().len(), 1);
        assert_eq!(state.chat.messages()[0].text, SIMULATION_GREETING);
        assert_eq!(state.chat.session_id(), state.session().map(|s| s.id()));
    }

    #[test]
    fn test_reset_returns_to_catalog() {
        let backend = MockChatBackend::new();
        let mut state = SimulationState::new();
        state.start(&SCENARIOS[0], &backend);
        let chat_id = state.chat.id();
        state.reset();

        assert!(state.in_catalog());
        assert!(state.session().is_none());
        assert!(state.chat.messages().is_empty());
        assert_ne!(state.chat.id(), chat_id);
    }

    #[test]
    fn test_restart_gets_fresh_session() {
        let backend = MockChatBackend::new();
        let mut state = SimulationState::new();
        state.start(&SCENARIOS[0], &backend);
        let first = state.session().unwrap().id();
        state.reset();
        state.start(&SCENARIOS[0], &backend);
        assert_ne!(state.session().unwrap().id(), first);
    }

    #[test]
    fn test_cursor_wraps_and_starts_highlighted() {
        let backend = MockChatBackend::new();
        let mut state = SimulationState::new();
        state.cursor_prev();
        assert_eq!(state.cursor(), SCENARIOS.len() - 1);
        state.cursor_next();
        assert_eq!(state.cursor(), 0);
        state.select(2);
        state.select(9);
        assert_eq!(state.cursor(), 2);
        state.start_highlighted(&backend);
        assert_eq!(state.selected().unwrap().id, "interrogatorio");
    }
}
