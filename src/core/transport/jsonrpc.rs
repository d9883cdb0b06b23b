//! JSON-RPC message handling shared by the HTTP transports.
//!
//! Both the single-shot endpoint and the SSE session endpoint decode one
//! message with [`parse_request`] and answer it with [`process_request`];
//! they differ only in how the response travels back.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::core::McpServer;
use crate::core::server::INSTRUCTIONS;
use crate::domains::tools::ToolError;

/// Protocol version reported on `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Attach structured data to an error response.
    pub fn with_data(mut self, data: Value) -> Self {
        if let Some(error) = self.error.as_mut() {
            error.data = Some(data);
        }
        self
    }

    /// Parse error.
    pub fn parse_error() -> Self {
        Self::error(None, PARSE_ERROR, "Parse error")
    }

    /// Method not found error.
    pub fn method_not_found(id: Option<Value>) -> Self {
        Self::error(id, METHOD_NOT_FOUND, "Method not found")
    }

    /// Invalid request error.
    pub fn invalid_request(id: Option<Value>) -> Self {
        Self::error(id, INVALID_REQUEST, "Invalid Request")
    }

    /// Invalid params error.
    pub fn invalid_params(id: Option<Value>, msg: impl Into<String>) -> Self {
        Self::error(id, INVALID_PARAMS, msg)
    }

    /// Internal error.
    pub fn internal_error(id: Option<Value>) -> Self {
        Self::error(id, INTERNAL_ERROR, "Internal error")
    }

    /// Whether this is an error response.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Decode one JSON-RPC message from a request body.
///
/// On failure, returns the error response to send back.
pub fn parse_request(body: &[u8]) -> Result<JsonRpcRequest, JsonRpcResponse> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        warn!("Unparseable JSON-RPC body: {}", e);
        JsonRpcResponse::parse_error()
    })?;

    let id = value.get("id").cloned();
    serde_json::from_value(value).map_err(|e| {
        warn!("Malformed JSON-RPC message: {}", e);
        JsonRpcResponse::invalid_request(id)
    })
}

/// Process a JSON-RPC request.
///
/// Returns `None` for notifications, which get no response.
pub fn process_request(server: &McpServer, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
    if request.jsonrpc != "2.0" {
        return Some(JsonRpcResponse::invalid_request(request.id));
    }

    let response = match request.method.as_str() {
        "initialize" => handle_initialize(server, request),
        "ping" => JsonRpcResponse::success(request.id, json!({})),
        "tools/list" => handle_tools_list(server, request),
        "tools/call" => handle_tools_call(server, request),
        method if method.starts_with("notifications/") => {
            info!("Received notification: {}", method);
            return None;
        }
        _ => {
            warn!("Unknown method: {}", request.method);
            JsonRpcResponse::method_not_found(request.id)
        }
    };

    Some(response)
}

fn handle_initialize(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing initialize request");

    let result = json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": server.name(),
            "version": server.version()
        },
        "instructions": INSTRUCTIONS
    });

    JsonRpcResponse::success(request.id, result)
}

fn handle_tools_list(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing tools/list request");

    JsonRpcResponse::success(request.id, json!({ "tools": server.list_tools() }))
}

fn handle_tools_call(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    let params = match request.params {
        Some(p) => p,
        None => return JsonRpcResponse::invalid_params(request.id, "Missing params"),
    };

    let name = match params.get("name").and_then(|v| v.as_str()) {
        Some(n) => n.to_string(),
        None => return JsonRpcResponse::invalid_params(request.id, "Missing tool name"),
    };

    info!("Processing tools/call request for {}", name);

    let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);

    match server.call_tool(&name, arguments) {
        Ok(envelope) => JsonRpcResponse::success(request.id, envelope.to_json()),
        Err(e) => tool_error_response(request.id, &e),
    }
}

/// Map a dispatch error onto a JSON-RPC error response.
///
/// Internal errors carry a generic message only.
pub fn tool_error_response(id: Option<Value>, error: &ToolError) -> JsonRpcResponse {
    match error {
        ToolError::UnknownTool(_) => JsonRpcResponse::invalid_params(id, error.to_string()),
        ToolError::Validation { path, expected, .. } => {
            JsonRpcResponse::invalid_params(id, error.to_string())
                .with_data(json!({ "path": path, "expected": expected }))
        }
        ToolError::DuplicateTool(_) | ToolError::Internal(_) => {
            JsonRpcResponse::internal_error(id)
        }
    }
}
