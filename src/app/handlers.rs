//! Message handling for the App.

use tracing::{debug, warn};

use super::{App, AppMessage};

impl App {
    /// Apply a message from a reply task.
    ///
    /// Messages for a transcript that has since been discarded are dropped.
    pub fn handle_message(&mut self, msg: AppMessage) {
        let chat_id = msg.chat_id();
        let Some(panel) = self.panel_by_id(chat_id) else {
            debug!(chat = %chat_id, ?msg, "ignoring message for disposed chat");
            return;
        };
        match msg {
            AppMessage::StreamStarted { .. } => {
                panel.stream_started();
            }
            AppMessage::StreamFragment { text, .. } => {
                if let Some(id) = panel.streaming_id().map(str::to_owned) {
                    panel.apply_fragment(&id, &text);
                }
            }
            AppMessage::StreamFailed { error, .. } => {
                warn!(chat = %chat_id, %error, "reply failed");
                panel.fail();
                panel.finish();
            }
            AppMessage::StreamFinished { .. } => {
                panel.finish();
            }
        }
        self.mark_dirty();
    }
}
