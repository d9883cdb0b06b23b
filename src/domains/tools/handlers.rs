//! Tool handler seam.
//!
//! Every tool's behaviour sits behind [`ToolHandler`]. The registry stores
//! handlers as `Arc<dyn ToolHandler>`, so the dispatcher calls every tool the
//! same way regardless of what it does.

use super::envelope::ResultEnvelope;
use super::error::ToolError;
use super::schema::ValidatedArgs;

/// Trait for tool behaviour.
///
/// Handlers only ever see arguments that passed the tool's input shape.
/// Expected domain conditions must be returned as an `Ok` envelope; an `Err`
/// is treated as an internal fault by the dispatcher.
pub trait ToolHandler: Send + Sync {
    /// Execute the tool with validated arguments.
    fn call(&self, args: &ValidatedArgs) -> Result<ResultEnvelope, ToolError>;
}

impl<F> ToolHandler for F
where
    F: Fn(&ValidatedArgs) -> Result<ResultEnvelope, ToolError> + Send + Sync,
{
    fn call(&self, args: &ValidatedArgs) -> Result<ResultEnvelope, ToolError> {
        self(args)
    }
}
