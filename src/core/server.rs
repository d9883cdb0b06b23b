//! MCP Server implementation and lifecycle management.
//!
//! [`McpServer`] owns the tool registry (and through it the catalog) and the
//! dispatcher. It is cheap to clone and is shared by every transport:
//!
//! - the HTTP transports call [`McpServer::list_tools`] and
//!   [`McpServer::call_tool`] directly;
//! - the STDIO transport goes through rmcp, using a `ToolRouter` generated
//!   from the same registry.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::catalog::CatalogStore;
use crate::domains::tools::{
    Invocation, ResultEnvelope, ToolDispatcher, ToolError, ToolRegistry, build_tool_router,
};

/// Instructions advertised to clients on initialization.
pub const INSTRUCTIONS: &str = "Authless calculator and product catalog server. \
     Use `add` or `calculate` for arithmetic and `search_products` to search the catalog.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher over the tool registry.
    dispatcher: Arc<ToolDispatcher>,

    /// Tool router for rmcp sessions.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server over the built-in catalog.
    pub fn new(config: Config) -> super::Result<Self> {
        Self::with_catalog(config, CatalogStore::seeded())
    }

    /// Create a new MCP server over an explicit catalog.
    pub fn with_catalog(config: Config, catalog: CatalogStore) -> super::Result<Self> {
        let catalog = Arc::new(catalog);
        let registry = ToolRegistry::with_default_tools(catalog.clone())?;
        info!(
            "Registered {} tools over {} products",
            registry.len(),
            catalog.len()
        );

        let dispatcher = Arc::new(ToolDispatcher::new(Arc::new(registry)));

        Ok(Self {
            config: Arc::new(config),
            tool_router: build_tool_router::<Self>(dispatcher.clone()),
            dispatcher,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// List all available tools (for HTTP transports).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.dispatcher.registry().list_tools()
    }

    /// Call a tool by name (for HTTP transports).
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<ResultEnvelope, ToolError> {
        self.dispatcher.dispatch(&Invocation::new(name, arguments))
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
