//! Authless calculator and product catalog MCP server.
//!
//! This crate exposes a small set of MCP tools (`add`, `calculate` and
//! `search_products`) over two HTTP transports, a single-shot JSON-RPC
//! endpoint and an SSE session endpoint, plus optional STDIO.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server facade and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **arithmetic**: calculator functions
//!   - **catalog**: static product catalog and search engine
//!   - **tools**: tool registry, argument validation and dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use catalog_calculator_mcp::{Config, McpServer};
//!
//! fn main() -> anyhow::Result<()> {
//!     let server = McpServer::new(Config::default())?;
//!     let result = server.call_tool("add", serde_json::json!({ "a": 1, "b": 2 }))?;
//!     assert_eq!(result.texts(), vec!["3"]);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};
