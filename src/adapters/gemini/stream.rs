//! Turning a streamed response body into reply fragments.

use bytes::Bytes;
use futures_util::stream::{self, Stream, StreamExt};
use std::fmt::Display;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

use super::payloads::{Content, GenerateContentResponse};
use crate::error::ChatError;
use crate::sse::{LineBuffer, SseEvent, SseParser};
use crate::traits::FragmentStream;

type ByteStream<E> = Pin<Box<dyn Stream<Item = Result<Bytes, E>> + Send>>;

/// State threaded through the unfold.
struct ReplyState<E> {
    bytes: ByteStream<E>,
    lines: LineBuffer,
    parser: SseParser,
    /// Full reply so far, committed to history on success
    reply: String,
    user_turn: Content,
    history: Arc<Mutex<Vec<Content>>>,
    body_done: bool,
    finished: bool,
}

impl<E> ReplyState<E> {
    /// Decode one event. `Ok(None)` means the chunk carried no text.
    fn handle_event(&mut self, event: SseEvent) -> Result<Option<String>, ChatError> {
        if event.data.is_empty() || event.data == "[DONE]" {
            return Ok(None);
        }
        let chunk: GenerateContentResponse = serde_json::from_str(&event.data)?;
        if let Some(error) = chunk.error {
            return Err(ChatError::Service {
                status: error.status_label(),
                message: error.message,
            });
        }
        let text = chunk.text();
        if text.is_empty() {
            return Ok(None);
        }
        self.reply.push_str(&text);
        Ok(Some(text))
    }

    /// Record the finished exchange. A reply without text (an empty body,
    /// or one blocked by a finish reason) is left out, since an empty model
    /// turn would make every later request of the session invalid.
    fn commit(&mut self) {
        if self.reply.is_empty() {
            debug!("reply carried no text, history unchanged");
            return;
        }
        let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        history.push(self.user_turn.clone());
        history.push(Content::model(std::mem::take(&mut self.reply)));
    }
}

/// Wrap a response body as a [`FragmentStream`].
///
/// Each SSE `data:` payload is decoded as a [`GenerateContentResponse`];
/// chunks without text are skipped. The first error ends the stream. When the
/// body ends cleanly the user turn and the full reply are appended to
/// `history`; a failed exchange leaves it untouched.
pub fn reply_stream<S, E>(
    bytes: S,
    history: Arc<Mutex<Vec<Content>>>,
    user_turn: Content,
) -> FragmentStream
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: Display + Send + 'static,
{
    let state = ReplyState {
        bytes: Box::pin(bytes),
        lines: LineBuffer::new(),
        parser: SseParser::new(),
        reply: String::new(),
        user_turn,
        history,
        body_done: false,
        finished: false,
    };

    let fragments = stream::unfold(state, |mut state| async move {
        loop {
            if state.finished {
                return None;
            }

            // First, process any complete lines already buffered
            if let Some(line) = state.lines.next_line() {
                let event = match line {
                    Ok(line) => state.parser.feed_line(&line),
                    Err(e) => {
                        state.finished = true;
                        return Some((Err(ChatError::from(e)), state));
                    }
                };
                let Some(event) = event else {
                    continue;
                };
                match state.handle_event(event) {
                    Ok(Some(text)) => return Some((Ok(text), state)),
                    Ok(None) => continue,
                    Err(e) => {
                        state.finished = true;
                        return Some((Err(e), state));
                    }
                }
            }

            if state.body_done {
                // Body ended: flush an unterminated event, then commit
                let Some(event) = state.parser.finish() else {
                    state.commit();
                    return None;
                };
                match state.handle_event(event) {
                    Ok(Some(text)) => return Some((Ok(text), state)),
                    Ok(None) => continue,
                    Err(e) => {
                        state.finished = true;
                        return Some((Err(e), state));
                    }
                }
            }

            // Need more data from the body
            match state.bytes.next().await {
                Some(Ok(chunk)) => state.lines.extend(&chunk),
                Some(Err(e)) => {
                    state.finished = true;
                    return Some((Err(ChatError::Transport(e.to_string())), state));
                }
                None => {
                    state.lines.close();
                    state.body_done = true;
                }
            }
        }
    });

    Box::pin(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gemini::payloads::GenerateContentRequest;

    fn body(chunks: &[&str]) -> impl Stream<Item = Result<Bytes, std::io::Error>> + Send + 'static {
        let owned: Vec<Result<Bytes, std::io::Error>> = chunks
            .iter()
            .map(|c| Ok(Bytes::from(c.to_string())))
            .collect();
        stream::iter(owned)
    }

    fn text_chunk(text: &str) -> String {
        format!(
            "data: {}\n\n",
            serde_json::json!({
                "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
            })
        )
    }

    async fn collect(stream: FragmentStream) -> Vec<Result<String, ChatError>> {
        stream.collect().await
    }

    #[tokio::test]
    async fn test_fragments_in_order_and_history_committed() {
        let history = Arc::new(Mutex::new(Vec::new()));
        let chunks = [text_chunk("Hola"), text_chunk(" Mundo")];
        let refs: Vec<&str> = chunks.iter().map(String::as_str).collect();

        let items = collect(reply_stream(
            body(&refs),
            Arc::clone(&history),
            Content::user("saludo"),
        ))
        .await;

        let texts: Vec<String> = items.into_iter().map(Result::unwrap).collect();
        assert_eq!(texts, vec!["Hola", " Mundo"]);
        let history = history.lock().unwrap();
        assert_eq!(*history, vec![Content::user("saludo"), Content::model("Hola Mundo")]);
    }

    #[tokio::test]
    async fn test_event_split_across_chunks() {
        let history = Arc::new(Mutex::new(Vec::new()));
        let full = text_chunk("está");
        let (a, b) = full.split_at(12);
        let items = collect(reply_stream(body(&[a, b]), history, Content::user("x"))).await;
        assert_eq!(items, vec![Ok("está".to_string())]);
    }

    #[tokio::test]
    async fn test_unterminated_final_event_is_flushed() {
        let history = Arc::new(Mutex::new(Vec::new()));
        let last = text_chunk("fin");
        let trimmed = last.trim_end();
        let items = collect(reply_stream(
            body(&[trimmed]),
            Arc::clone(&history),
            Content::user("x"),
        ))
        .await;
        assert_eq!(items, vec![Ok("fin".to_string())]);
        assert_eq!(history.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_chunks_without_text_are_skipped() {
        let history = Arc::new(Mutex::new(Vec::new()));
        let meta = "data: {\"candidates\":[{\"finishReason\":\"STOP\"}]}\n\n";
        let keepalive = ": ping\n\n";
        let chunk = text_chunk("ok");
        let items = collect(reply_stream(
            body(&[keepalive, chunk.as_str(), meta]),
            history,
            Content::user("x"),
        ))
        .await;
        assert_eq!(items, vec![Ok("ok".to_string())]);
    }

    #[tokio::test]
    async fn test_error_object_fails_stream_and_keeps_history() {
        let history = Arc::new(Mutex::new(vec![Content::user("a"), Content::model("b")]));
        let chunk = text_chunk("parcial");
        let error = "data: {\"error\":{\"code\":503,\"message\":\"overloaded\",\"status\":\"UNAVAILABLE\"}}\n\n";
        let after = text_chunk("never");

        let items = collect(reply_stream(
            body(&[chunk.as_str(), error, after.as_str()]),
            Arc::clone(&history),
            Content::user("x"),
        ))
        .await;

        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Ok("parcial".to_string()));
        assert!(matches!(
            &items[1],
            Err(ChatError::Service { status, .. }) if status == "UNAVAILABLE"
        ));
        assert_eq!(history.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_json_fails_stream() {
        let history = Arc::new(Mutex::new(Vec::new()));
        let items = collect(reply_stream(
            body(&["data: {not json\n\n"]),
            Arc::clone(&history),
            Content::user("x"),
        ))
        .await;
        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], Err(ChatError::Parse(_))));
        assert!(history.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_fails_stream() {
        let history = Arc::new(Mutex::new(Vec::new()));
        let chunk = text_chunk("uno");
        let items: Vec<Result<Bytes, std::io::Error>> = vec![
            Ok(Bytes::from(chunk)),
            Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset")),
        ];
        let results = collect(reply_stream(
            stream::iter(items),
            Arc::clone(&history),
            Content::user("x"),
        ))
        .await;
        assert_eq!(results[0], Ok("uno".to_string()));
        assert!(matches!(&results[1], Err(ChatError::Transport(msg)) if msg.contains("reset")));
        assert!(history.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_body_leaves_history_unchanged() {
        let history = Arc::new(Mutex::new(Vec::new()));
        let items = collect(reply_stream(body(&[]), Arc::clone(&history), Content::user("x"))).await;
        assert!(items.is_empty());
        assert!(history.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blocked_reply_leaves_history_unchanged() {
        let history = Arc::new(Mutex::new(vec![Content::user("a"), Content::model("b")]));
        let blocked = "data: {\"candidates\":[{\"finishReason\":\"SAFETY\"}]}\n\n";
        let items = collect(reply_stream(
            body(&[blocked]),
            Arc::clone(&history),
            Content::user("pregunta"),
        ))
        .await;
        assert!(items.is_empty());

        let history = history.lock().unwrap().clone();
        let next = GenerateContentRequest::new("p", history, Content::user("otra"));
        assert_eq!(
            next.contents,
            vec![Content::user("a"), Content::model("b"), Content::user("otra")]
        );
    }

    #[tokio::test]
    async fn test_event_line_without_data_is_skipped() {
        let history = Arc::new(Mutex::new(Vec::new()));
        let chunk = text_chunk("sigue");
        let items = collect(reply_stream(
            body(&["event: message\n\n", chunk.as_str()]),
            Arc::clone(&history),
            Content::user("x"),
        ))
        .await;
        assert_eq!(items, vec![Ok("sigue".to_string())]);
        assert_eq!(history.lock().unwrap().len(), 2);
    }
}
