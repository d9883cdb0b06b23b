//! Tool Dispatcher - runs one invocation end-to-end.
//!
//! lookup -> validate -> invoke -> wrap. Validation failures never reach a
//! handler, and a handler runs at most once per invocation. Handler errors and
//! panics are contained here and surface as [`ToolError::Internal`] with a
//! generic message; the detail only goes to the log.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, instrument, warn};

use super::envelope::ResultEnvelope;
use super::error::ToolError;
use super::registry::ToolRegistry;

/// One request to run a tool.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Invocation {
    /// Name of the tool to run.
    pub name: String,

    /// Untyped arguments. `null` means no arguments.
    #[serde(default)]
    pub arguments: Value,
}

impl Invocation {
    /// Create an invocation.
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// Dispatches invocations against a shared, read-only registry.
#[derive(Debug, Clone)]
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
}

impl ToolDispatcher {
    /// Create a dispatcher over `registry`.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this dispatcher serves.
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Run one invocation.
    #[instrument(skip_all, fields(tool = %invocation.name))]
    pub fn dispatch(&self, invocation: &Invocation) -> Result<ResultEnvelope, ToolError> {
        let descriptor = self.registry.lookup(&invocation.name).inspect_err(|_| {
            warn!("Unknown tool requested: {}", invocation.name);
        })?;

        let args = descriptor
            .input()
            .validate(&invocation.arguments)
            .inspect_err(|e| warn!("Rejected arguments: {}", e))?;

        info!("Calling tool");

        let handler = descriptor.handler();
        match panic::catch_unwind(AssertUnwindSafe(|| handler.call(&args))) {
            Ok(Ok(envelope)) => Ok(envelope),
            Ok(Err(e)) => {
                error!("Tool failed: {}", e);
                Err(ToolError::internal("tool execution failed"))
            }
            Err(payload) => {
                error!("Tool panicked: {}", panic_message(payload.as_ref()));
                Err(ToolError::internal("tool execution failed"))
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}
