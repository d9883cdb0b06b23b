//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Used by the STDIO transport. Every registered tool becomes one dynamic
//! route that forwards to the shared [`ToolDispatcher`], so rmcp sessions get
//! exactly the same validation and error handling as the HTTP transports.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
    model::{CallToolResult, Content, Tool},
};
use serde_json::Value;

use super::dispatcher::{Invocation, ToolDispatcher};
use super::envelope::ResultEnvelope;
use super::error::ToolError;
use super::registry::ToolDescriptor;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(dispatcher: Arc<ToolDispatcher>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    dispatcher
        .registry()
        .descriptors()
        .iter()
        .fold(ToolRouter::new(), |router, descriptor| {
            router.with_route(create_route(descriptor, dispatcher.clone()))
        })
}

/// Create a Tool model for a descriptor (metadata).
pub fn to_tool(descriptor: &ToolDescriptor) -> Tool {
    Tool {
        name: descriptor.name().to_string().into(),
        description: Some(descriptor.description().to_string().into()),
        input_schema: Arc::new(descriptor.input().to_json_schema()),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Convert a result envelope into an rmcp result.
///
/// Only the text of each item is carried over.
pub fn to_call_tool_result(envelope: &ResultEnvelope) -> CallToolResult {
    let content = envelope
        .content()
        .iter()
        .map(|item| Content::text(item.as_text().to_string()))
        .collect();
    CallToolResult::success(content)
}

/// Map a dispatch error onto an rmcp protocol error.
pub fn to_mcp_error(error: &ToolError) -> McpError {
    match error {
        ToolError::UnknownTool(_) => McpError::invalid_params(error.to_string(), None),
        ToolError::Validation { path, expected, .. } => McpError::invalid_params(
            error.to_string(),
            Some(serde_json::json!({ "path": path, "expected": expected })),
        ),
        ToolError::DuplicateTool(_) | ToolError::Internal(_) => {
            McpError::internal_error("Internal error".to_string(), None)
        }
    }
}

fn create_route<S>(descriptor: &ToolDescriptor, dispatcher: Arc<ToolDispatcher>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let name = descriptor.name().to_string();
    ToolRoute::new_dyn(to_tool(descriptor), move |ctx: ToolCallContext<'_, S>| {
        let arguments = ctx
            .arguments
            .clone()
            .map(Value::Object)
            .unwrap_or(Value::Null);
        let invocation = Invocation::new(name.clone(), arguments);
        let dispatcher = dispatcher.clone();
        async move {
            dispatcher
                .dispatch(&invocation)
                .map(|envelope| to_call_tool_result(&envelope))
                .map_err(|e| to_mcp_error(&e))
        }
        .boxed()
    })
}
