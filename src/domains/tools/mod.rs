//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `schema.rs` - Data-driven input shapes and the generic validator
//! - `envelope.rs` - Result envelope returned by successful calls
//! - `handlers.rs` - The `ToolHandler` trait every tool implements
//! - `registry.rs` - Central tool registry (single source of truth)
//! - `dispatcher.rs` - lookup, validate, invoke, wrap
//! - `router.rs` - rmcp ToolRouter generated from the registry (STDIO)
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with its params, input shape and
//!    a `ToolHandler` impl
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `ToolRegistry::with_default_tools`
//!
//! Both transports pick it up from the registry.

pub mod definitions;
mod dispatcher;
mod envelope;
mod error;
mod handlers;
mod registry;
pub mod router;
mod schema;

pub use dispatcher::{Invocation, ToolDispatcher};
pub use envelope::{ContentItem, ResultEnvelope};
pub use error::ToolError;
pub use handlers::ToolHandler;
pub use registry::{ToolDescriptor, ToolRegistry};
pub use router::build_tool_router;
pub use schema::{FieldSpec, FieldType, InputShape, ValidatedArgs};
