//! Submitting chat input and folding reply streams into app messages.

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::session::send_message_stream;
use crate::state::ChatId;
use crate::traits::SessionHandle;

use super::{App, AppMessage};

impl App {
    /// Send the active panel's input and spawn the reply task.
    ///
    /// Does nothing when there is no active chat or the panel refuses the
    /// send (blank input, no session, reply already loading).
    pub fn submit_input(&mut self) {
        let Some(panel) = self.active_panel_mut() else {
            return;
        };
        let chat_id = panel.id();
        let Some((session, text)) = panel.begin_send() else {
            return;
        };
        self.mark_dirty();

        let message_tx = self.message_tx.clone();
        tokio::spawn(run_reply(chat_id, session, text, message_tx));
    }
}

/// Drive one exchange to completion.
///
/// Sends `StreamStarted` once the stream opens, one `StreamFragment` per
/// non-empty fragment, and ends with exactly one of `StreamFinished` or
/// `StreamFailed`. A send that fails before the stream opens produces
/// only `StreamFailed`.
pub async fn run_reply(
    chat_id: ChatId,
    session: SessionHandle,
    text: String,
    message_tx: mpsc::UnboundedSender<AppMessage>,
) {
    let mut stream = match send_message_stream(session.as_ref(), &text).await {
        Ok(stream) => stream,
        Err(error) => {
            let _ = message_tx.send(AppMessage::StreamFailed { chat_id, error });
            return;
        }
    };

    let _ = message_tx.send(AppMessage::StreamStarted { chat_id });
    while let Some(item) = stream.next().await {
        match item {
            Ok(fragment) => {
                if fragment.is_empty() {
                    continue;
                }
                debug!(chat = %chat_id, len = fragment.len(), "reply fragment");
                let _ = message_tx.send(AppMessage::StreamFragment {
                    chat_id,
                    text: fragment,
                });
            }
            Err(e) => {
                error!(chat = %chat_id, session = %session.id(), error = %e, "reply stream failed");
                let _ = message_tx.send(AppMessage::StreamFailed { chat_id, error: e });
                return;
            }
        }
    }
    let _ = message_tx.send(AppMessage::StreamFinished { chat_id });
}
