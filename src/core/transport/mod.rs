//! Transport layer for the MCP server.
//!
//! This module provides the transport implementations:
//! - **HTTP** (feature `http`): one axum server hosting two transports,
//!   picked by request path:
//!   - `/mcp`: single-shot JSON-RPC, one request per POST
//!   - `/sse` + `/sse/message`: session-based Server-Sent Events
//! - **STDIO** (feature `stdio`): standard MCP over stdin/stdout via rmcp
//!
//! Every transport hands decoded tool invocations to the shared
//! [`McpServer`](crate::core::McpServer).

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub mod jsonrpc;

#[cfg(feature = "http")]
pub mod sse;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
