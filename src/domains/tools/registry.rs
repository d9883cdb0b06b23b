//! Tool Registry - central registration and lookup for all tools.
//!
//! The registry is built once at startup and is read-only afterwards. It is
//! the single source of truth for tool metadata: the HTTP transports list
//! tools from it and the rmcp router for STDIO is generated from it.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::domains::catalog::CatalogStore;

use super::definitions::{AddTool, CalculateTool, SearchProductsTool};
use super::error::ToolError;
use super::handlers::ToolHandler;
use super::schema::InputShape;

// ============================================================================
// Tool Descriptor
// ============================================================================

/// A registered tool: name, metadata, input shape and handler.
#[derive(Clone)]
pub struct ToolDescriptor {
    name: String,
    description: String,
    input: InputShape,
    handler: Arc<dyn ToolHandler>,
}

impl ToolDescriptor {
    /// Create a descriptor.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input: InputShape,
        handler: Arc<dyn ToolHandler>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input,
            handler,
        }
    }

    /// Tool name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tool description shown to clients.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Declared input shape.
    pub fn input(&self) -> &InputShape {
        &self.input
    }

    /// Handler for this tool.
    pub fn handler(&self) -> &Arc<dyn ToolHandler> {
        &self.handler
    }

    /// Metadata as advertised by `tools/list`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input.to_json_schema(),
        })
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("input", &self.input)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - holds all available tools in registration order.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the registry holding every built-in tool.
    pub fn with_default_tools(catalog: Arc<CatalogStore>) -> Result<Self, ToolError> {
        let mut registry = Self::new();
        registry.register(AddTool::descriptor())?;
        registry.register(CalculateTool::descriptor())?;
        registry.register(SearchProductsTool::descriptor(catalog))?;
        Ok(registry)
    }

    /// Add a tool. Names must be unique.
    pub fn register(&mut self, descriptor: ToolDescriptor) -> Result<(), ToolError> {
        if self.contains(descriptor.name()) {
            return Err(ToolError::duplicate_tool(descriptor.name()));
        }
        debug!("Registered tool: {}", descriptor.name());
        self.tools.push(descriptor);
        Ok(())
    }

    /// Find a tool by name.
    pub fn lookup(&self, name: &str) -> Result<&ToolDescriptor, ToolError> {
        self.tools
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| ToolError::unknown_tool(name))
    }

    /// Whether a tool with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t.name() == name)
    }

    /// All descriptors, in registration order.
    pub fn descriptors(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Metadata for every tool, as advertised by `tools/list`.
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tools.iter().map(ToolDescriptor::to_json).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
