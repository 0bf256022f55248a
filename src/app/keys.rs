//! Keyboard and paste input for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::content::scenarios::SCENARIOS;
use crate::state::ChatPanel;

use super::{App, View};

/// Lines moved by PageUp/PageDown.
const PAGE: u16 = 10;

impl App {
    /// Handle a key press.
    ///
    /// Global bindings come first; the rest goes to the current view.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.quit();
                return;
            }
            KeyCode::Tab => {
                self.next_view();
                return;
            }
            KeyCode::BackTab => {
                self.prev_view();
                return;
            }
            KeyCode::F(n @ 1..=4) => {
                self.set_view(View::ALL[(n - 1) as usize]);
                return;
            }
            _ => {}
        }

        match self.view() {
            View::Home => self.handle_home_key(key),
            View::Learn => self.handle_learn_key(key),
            View::Chat => {
                if ctrl && key.code == KeyCode::Char('r') {
                    self.reset_assistant();
                } else {
                    self.handle_chat_key(key);
                }
            }
            View::Simulation => {
                if self.simulation.in_catalog() {
                    self.handle_catalog_key(key);
                } else if key.code == KeyCode::Esc {
                    self.simulation.reset();
                } else {
                    self.handle_chat_key(key);
                }
            }
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => self.home_cursor_prev(),
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => self.home_cursor_next(),
            KeyCode::Enter => self.activate_home_card(self.home_cursor),
            // "Ir al Temario"
            KeyCode::Char('t') => self.set_view(View::Learn),
            KeyCode::Char(c @ '1'..='3') => self.activate_home_card(c as usize - '1' as usize),
            _ => {}
        }
    }

    fn handle_learn_key(&mut self, key: KeyEvent) {
        let library = &mut self.library;
        match key.code {
            KeyCode::Up => library.prev_topic(),
            KeyCode::Down => library.next_topic(),
            KeyCode::Left => library.prev_category(),
            KeyCode::Right => library.next_category(),
            KeyCode::PageUp => library.scroll_up(PAGE),
            KeyCode::PageDown => library.scroll_down(PAGE),
            KeyCode::Char('k') => library.scroll_up(1),
            KeyCode::Char('j') => library.scroll_down(1),
            KeyCode::Home => library.scroll_up(u16::MAX),
            _ => {}
        }
    }

    fn handle_catalog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => self.simulation.cursor_prev(),
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => self.simulation.cursor_next(),
            KeyCode::Enter => {
                let backend = self.backend.clone();
                self.simulation.start_highlighted(backend.as_ref());
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < SCENARIOS.len() {
                    let backend = self.backend.clone();
                    self.simulation.select(index);
                    self.simulation.start_highlighted(backend.as_ref());
                }
            }
            _ => {}
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) => {}
            KeyCode::Enter => self.submit_input(),
            _ => {
                if let Some(panel) = self.active_panel_mut() {
                    edit_chat(panel, key);
                }
            }
        }
    }

    /// Insert pasted text into the active chat input.
    pub fn handle_paste(&mut self, text: &str) {
        if let Some(input) = self.active_panel_mut().and_then(ChatPanel::input_mut) {
            input.insert_str(text);
            self.mark_dirty();
        }
    }
}

/// Editing and scrolling keys of a chat panel.
fn edit_chat(panel: &mut ChatPanel, key: KeyEvent) {
    match key.code {
        KeyCode::PageUp => panel.scroll_up(PAGE),
        KeyCode::PageDown => panel.scroll_down(PAGE),
        KeyCode::Up => panel.scroll_up(1),
        KeyCode::Down => panel.scroll_down(1),
        _ => {
            let Some(input) = panel.input_mut() else {
                return;
            };
            match key.code {
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    input.insert_char(c)
                }
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete_char(),
                KeyCode::Left => input.move_cursor_left(),
                KeyCode::Right => input.move_cursor_right(),
                KeyCode::Home => input.move_cursor_home(),
                KeyCode::End => input.move_cursor_end(),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockChatBackend;
    use std::sync::Arc;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app() -> (Arc<MockChatBackend>, App) {
        let backend = Arc::new(MockChatBackend::new());
        let app = App::new(backend.clone());
        (backend, app)
    }

    #[test]
    fn test_ctrl_c_quits_from_any_view() {
        let (_b, mut app) = app();
        app.set_view(View::Chat);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_function_keys_jump() {
        let (_b, mut app) = app();
        press(&mut app, KeyCode::F(4));
        assert_eq!(app.view(), View::Simulation);
        press(&mut app, KeyCode::F(1));
        assert_eq!(app.view(), View::Home);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view(), View::Learn);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.view(), View::Home);
    }

    #[test]
    fn test_home_number_keys() {
        let (_b, mut app) = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.view(), View::Chat);
    }

    #[test]
    fn test_typing_goes_to_chat_input() {
        let (_b, mut app) = app();
        app.set_view(View::Chat);
        type_text(&mut app, "j1");
        assert_eq!(app.assistant_chat.input().content(), "j1");
        assert_eq!(app.view(), View::Chat);
    }

    #[test]
    fn test_shift_enter_does_not_submit() {
        let (backend, mut app) = app();
        app.set_view(View::Chat);
        type_text(&mut app, "hola");
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT));
        assert_eq!(app.assistant_chat.messages().len(), 1);
        assert!(backend.sends().is_empty());
        assert_eq!(app.assistant_chat.input().content(), "hola");
    }

    #[test]
    fn test_blank_enter_sends_nothing() {
        let (backend, mut app) = app();
        app.set_view(View::Chat);
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.assistant_chat.messages().len(), 1);
        assert!(backend.sends().is_empty());
    }

    #[test]
    fn test_ctrl_r_resets_assistant() {
        let (backend, mut app) = app();
        app.set_view(View::Chat);
        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(backend.sessions().len(), 2);
    }

    #[test]
    fn test_learn_arrows() {
        let (_b, mut app) = app();
        app.set_view(View::Learn);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.library.current_category().id, "etapas");
        press(&mut app, KeyCode::Down);
        assert_eq!(
            app.library.current_topic().id,
            app.library.current_category().topics[1].id
        );
    }

    #[test]
    fn test_catalog_start_and_escape() {
        let (backend, mut app) = app();
        app.set_view(View::Simulation);
        press(&mut app, KeyCode::Char('3'));
        assert!(!app.simulation.in_catalog());
        assert_eq!(app.simulation.selected().unwrap().id, "interrogatorio");
        assert_eq!(backend.sessions().len(), 1);

        type_text(&mut app, "objeción");
        assert_eq!(app.simulation.chat.input().content(), "objeción");
        press(&mut app, KeyCode::Esc);
        assert!(app.simulation.in_catalog());
    }

    #[test]
    fn test_paste_into_chat() {
        let (_b, mut app) = app();
        app.handle_paste("ignored");
        app.set_view(View::Chat);
        app.handle_paste("uno\ndos");
        assert_eq!(app.assistant_chat.input().content(), "uno dos");
    }
}
