//! HTTP transport implementation.
//!
//! One axum server hosts both HTTP transports, selected by path:
//!
//! - `POST <mcp_path>`: single-shot JSON-RPC. The response travels back in
//!   the HTTP body; notifications get `202 Accepted`.
//! - `GET <sse_path>` / `POST <sse_path>/message`: SSE sessions, see
//!   [`super::sse`].
//!
//! Any other path answers `404 Not found` without reading the body.

use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use bytes::Bytes;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use super::jsonrpc::{parse_request, process_request};
use super::sse::{self, SessionStore};
use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The MCP server instance.
    pub(crate) server: McpServer,
    /// Open SSE sessions.
    pub(crate) sessions: SessionStore,
    /// Path advertised to SSE clients for posting messages.
    pub(crate) sse_message_path: String,
    /// Interval between SSE keep-alive comments.
    pub(crate) keep_alive: Duration,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Build the axum router serving both transports.
    pub fn router(&self, server: McpServer) -> Router {
        let sse_message_path = self.config.sse_message_path();

        let state = AppState {
            server,
            sessions: SessionStore::new(),
            sse_message_path: sse_message_path.clone(),
            keep_alive: Duration::from_secs(self.config.sse_keep_alive_secs),
        };

        let mut app = Router::new()
            .route(&self.config.mcp_path, post(handle_mcp))
            .route(&self.config.sse_path, get(sse::open_stream))
            .route(&sse_message_path, post(sse::post_message))
            .fallback(not_found)
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Single-shot JSON-RPC: POST {}", self.config.mcp_path);
        info!("  → SSE stream:           GET  {}", self.config.sse_path);
        info!(
            "  → SSE messages:         POST {}",
            self.config.sse_message_path()
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Handle one single-shot JSON-RPC message.
#[instrument(skip_all)]
async fn handle_mcp(State(state): State<AppState>, body: Bytes) -> Response {
    let request = match parse_request(&body) {
        Ok(request) => request,
        Err(response) => return (StatusCode::BAD_REQUEST, Json(response)).into_response(),
    };

    info!("Received JSON-RPC request: {}", request.method);

    match process_request(&state.server, request) {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// Fallback for every unrouted path.
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}
