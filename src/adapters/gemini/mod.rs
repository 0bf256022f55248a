//! Gemini REST adapter.
//!
//! Sessions POST to `{base_url}/models/{model}:streamGenerateContent?alt=sse`
//! and consume the SSE reply through [`stream::reply_stream`]. Conversation
//! history lives in the session and grows only when an exchange completes.

pub mod payloads;
pub mod stream;

use async_trait::async_trait;
use reqwest::Client;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::ChatError;
use crate::traits::{ChatBackend, ChatSession, FragmentStream, SessionHandle, SessionId};
use payloads::{api_error_message, Content, GenerateContentRequest};

pub use stream::reply_stream;

/// Connection settings shared by every session of a backend.
#[derive(Debug)]
struct GeminiSettings {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiSettings {
    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:streamGenerateContent?alt=sse",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Production [`ChatBackend`] backed by the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    settings: Arc<GeminiSettings>,
}

impl GeminiBackend {
    /// Build a backend from resolved configuration.
    ///
    /// The HTTP client gets a connect timeout only; replies may stream for a
    /// long time.
    pub fn new(config: &AppConfig) -> Result<Self, ChatError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;
        Ok(Self::with_client(
            client,
            config.api_key.clone(),
            config.model.clone(),
            config.base_url.clone(),
        ))
    }

    pub fn with_client(
        client: Client,
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            settings: Arc::new(GeminiSettings {
                client,
                api_key: api_key.into(),
                model: model.into(),
                base_url: base_url.into(),
            }),
        }
    }
}

impl ChatBackend for GeminiBackend {
    fn create_session(&self, persona: &str) -> SessionHandle {
        let session = GeminiSession {
            id: SessionId::next(),
            persona: persona.to_string(),
            settings: Arc::clone(&self.settings),
            history: Arc::new(Mutex::new(Vec::new())),
        };
        info!(session = %session.id, model = %self.settings.model, "created Gemini session");
        Arc::new(session)
    }

    fn model(&self) -> &str {
        &self.settings.model
    }
}

/// One conversation. Holds the committed history of completed exchanges.
#[derive(Debug)]
pub struct GeminiSession {
    id: SessionId,
    persona: String,
    settings: Arc<GeminiSettings>,
    history: Arc<Mutex<Vec<Content>>>,
}

#[async_trait]
impl ChatSession for GeminiSession {
    fn id(&self) -> SessionId {
        self.id
    }

    fn persona(&self) -> &str {
        &self.persona
    }

    async fn send_message_stream(&self, message: &str) -> Result<FragmentStream, ChatError> {
        let user_turn = Content::user(message);
        let request = {
            let history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
            GenerateContentRequest::new(&self.persona, history.clone(), user_turn.clone())
        };
        debug!(
            session = %self.id,
            turns = request.contents.len(),
            "sending message to Gemini"
        );

        let response = self
            .settings
            .client
            .post(self.settings.endpoint())
            .header("x-goog-api-key", &self.settings.api_key)
            .header("Accept", "text/event-stream")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Http {
                status,
                message: api_error_message(&body),
            });
        }

        Ok(reply_stream(
            response.bytes_stream(),
            Arc::clone(&self.history),
            user_turn,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(base_url: &str) -> GeminiBackend {
        GeminiBackend::with_client(Client::new(), "key", "gemini-2.5-flash", base_url)
    }

    #[test]
    fn test_endpoint_format() {
        let backend = backend("https://generativelanguage.googleapis.com/v1beta/");
        assert_eq!(
            backend.settings.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:streamGenerateContent?alt=sse"
        );
    }

    #[test]
    fn test_sessions_get_distinct_ids_and_keep_persona() {
        let backend = backend("http://localhost");
        let a = backend.create_session("persona A");
        let b = backend.create_session("persona B");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.persona(), "persona A");
        assert_eq!(b.persona(), "persona B");
        assert_eq!(backend.model(), "gemini-2.5-flash");
    }
}
