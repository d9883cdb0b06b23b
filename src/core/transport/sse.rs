//! SSE session transport.
//!
//! A client opens `GET /sse` and receives an `endpoint` event naming the URL
//! to post messages to (`/sse/message?sessionId=<id>`). Each posted JSON-RPC
//! message is acknowledged with `202 Accepted`; its response is delivered on
//! the stream as a `message` event. Closing the stream ends the session.

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{
        IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
};
use bytes::Bytes;
use serde::Deserialize;
use tokio::sync::mpsc;
use tokio_stream::{Stream, StreamExt, wrappers::ReceiverStream};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::http::AppState;
use super::jsonrpc::{JsonRpcResponse, parse_request, process_request};

/// Responses buffered per session before posting blocks.
const SESSION_BUFFER: usize = 64;

type SessionSender = mpsc::Sender<JsonRpcResponse>;

/// Table of open SSE sessions.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, SessionSender>>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new session.
    ///
    /// The session is removed when the returned guard is dropped.
    pub fn open(&self) -> (SessionGuard, mpsc::Receiver<JsonRpcResponse>) {
        let id = Uuid::new_v4().to_string();
        let (tx, rx) = mpsc::channel(SESSION_BUFFER);
        self.lock().insert(id.clone(), tx);

        let guard = SessionGuard {
            id,
            store: self.clone(),
        };
        (guard, rx)
    }

    /// Sender for a session, if it is open.
    pub fn sender(&self, id: &str) -> Option<SessionSender> {
        self.lock().get(id).cloned()
    }

    /// Close a session.
    pub fn remove(&self, id: &str) {
        if self.lock().remove(id).is_some() {
            info!("SSE session {} closed", id);
        }
    }

    /// Number of open sessions.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no session is open.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, SessionSender>> {
        // The map holds no invariants a panicking holder could break.
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Keeps a session registered while alive.
pub struct SessionGuard {
    id: String,
    store: SessionStore,
}

impl SessionGuard {
    /// Session id.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.store.remove(&self.id);
    }
}

/// Query string of `POST /sse/message`.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// Open an SSE session.
#[instrument(skip_all)]
pub async fn open_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let (guard, rx) = state.sessions.open();
    info!(
        "SSE session {} opened ({} active)",
        guard.id(),
        state.sessions.len()
    );

    let endpoint = Event::default()
        .event("endpoint")
        .data(format!("{}?sessionId={}", state.sse_message_path, guard.id()));

    // The guard moves into the stream, so the session lives as long as it.
    let messages = ReceiverStream::new(rx).map(move |response| {
        let _session = &guard;
        Ok::<_, Infallible>(message_event(&response))
    });

    Sse::new(tokio_stream::once(Ok::<_, Infallible>(endpoint)).chain(messages))
        .keep_alive(KeepAlive::new().interval(state.keep_alive).text("keep-alive"))
}

/// Accept one JSON-RPC message for a session.
#[instrument(skip_all)]
pub async fn post_message(
    State(state): State<AppState>,
    Query(query): Query<MessageQuery>,
    body: Bytes,
) -> Response {
    let Some(session_id) = query.session_id else {
        return (StatusCode::BAD_REQUEST, "Missing sessionId").into_response();
    };

    let Some(sender) = state.sessions.sender(&session_id) else {
        warn!("Message for unknown session {}", session_id);
        return session_not_found();
    };

    let request = match parse_request(&body) {
        Ok(request) => request,
        Err(response) => return (StatusCode::BAD_REQUEST, Json(response)).into_response(),
    };

    info!("Received JSON-RPC request: {}", request.method);

    if let Some(response) = process_request(&state.server, request) {
        if sender.send(response).await.is_err() {
            state.sessions.remove(&session_id);
            return session_not_found();
        }
    }

    (StatusCode::ACCEPTED, "Accepted").into_response()
}

fn session_not_found() -> Response {
    (StatusCode::NOT_FOUND, "Session not found").into_response()
}

fn message_event(response: &JsonRpcResponse) -> Event {
    Event::default()
        .event("message")
        .json_data(response)
        .unwrap_or_else(|e| {
            warn!("Failed to encode SSE message: {}", e);
            Event::default().comment("encoding failed")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_drop_session() {
        let store = SessionStore::new();
        let (guard, _rx) = store.open();
        let id = guard.id().to_string();

        assert_eq!(store.len(), 1);
        assert!(store.sender(&id).is_some());

        drop(guard);
        assert!(store.is_empty());
        assert!(store.sender(&id).is_none());
    }

    #[test]
    fn test_session_ids_are_unique() {
        let store = SessionStore::new();
        let (a, _rx_a) = store.open();
        let (b, _rx_b) = store.open();
        assert_ne!(a.id(), b.id());
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_sender_delivers_to_receiver() {
        let store = SessionStore::new();
        let (guard, mut rx) = store.open();

        let sender = store.sender(guard.id()).unwrap();
        sender
            .send(JsonRpcResponse::success(None, serde_json::json!({})))
            .await
            .unwrap();

        let received = rx.recv().await.unwrap();
        assert!(!received.is_error());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let store = SessionStore::new();
        store.remove("missing");
        assert!(store.is_empty());
    }
}
