//! Shared fixtures for the integration tests.
//!
//! ```ignore
//! let (mut app, backend) = test_app();
//! app.set_view(View::Chat);
//! type_text(&mut app, "hola");
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use justicia::adapters::mock::MockChatBackend;
use justicia::app::{App, AppMessage};
use tokio::sync::mpsc::UnboundedReceiver;

/// App wired to a mock backend the test keeps a handle to.
pub fn test_app() -> (App, MockChatBackend) {
    let backend = MockChatBackend::new();
    let app = App::new(Arc::new(backend.clone()));
    (app, backend)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key(key(code));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

pub fn take_receiver(app: &mut App) -> UnboundedReceiver<AppMessage> {
    app.message_rx.take().expect("receiver already taken")
}

/// Feed messages to the app until the reply task reports an outcome.
pub async fn pump_until_done(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>) -> Vec<AppMessage> {
    let mut seen = Vec::new();
    while let Some(msg) = rx.recv().await {
        let done = matches!(
            msg,
            AppMessage::StreamFinished { .. } | AppMessage::StreamFailed { .. }
        );
        seen.push(msg.clone());
        app.handle_message(msg);
        if done {
            break;
        }
    }
    seen
}
