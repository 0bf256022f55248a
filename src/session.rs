//! Chat session factory.
//!
//! Thin layer over [`ChatBackend`] that knows the two personas the
//! application uses and logs failed sends before handing them back.

use tracing::{error, info};

use crate::error::ChatError;
use crate::traits::{ChatBackend, ChatSession, FragmentStream, SessionHandle};

pub use crate::content::texts::LEGAL_ASSISTANT_PERSONA;

/// Model used when none is configured.
pub const MODEL_NAME: &str = "gemini-2.5-flash";

/// New session with the legal-assistant persona.
pub fn create_legal_chat(backend: &dyn ChatBackend) -> SessionHandle {
    let session = backend.create_session(LEGAL_ASSISTANT_PERSONA);
    info!(session = %session.id(), "legal assistant session created");
    session
}

/// New session with a scenario's role-play instruction.
pub fn create_simulation_chat(backend: &dyn ChatBackend, instruction: &str) -> SessionHandle {
    let session = backend.create_session(instruction);
    info!(session = %session.id(), "simulation session created");
    session
}

/// Send `message` unchanged and return the reply stream.
pub async fn send_message_stream(
    session: &dyn ChatSession,
    message: &str,
) -> Result<FragmentStream, ChatError> {
    session.send_message_stream(message).await.map_err(|e| {
        error!(session = %session.id(), error = %e, "error sending message");
        e
    })
}
