//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur while registering or dispatching tools.
///
/// Domain outcomes such as division by zero or an empty search are not
/// errors; they come back as ordinary result envelopes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A tool with this name is already registered.
    #[error("Tool already registered: {0}")]
    DuplicateTool(String),

    /// The arguments do not satisfy the tool's input shape.
    #[error("Invalid arguments: {message}")]
    Validation {
        /// Offending field; empty when the arguments as a whole are wrong.
        path: String,
        /// Expected shape of the field.
        expected: String,
        /// Human-readable summary.
        message: String,
    },

    /// An unexpected fault inside a handler.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "duplicate tool" error.
    pub fn duplicate_tool(name: impl Into<String>) -> Self {
        Self::DuplicateTool(name.into())
    }

    /// Create a new validation error for `path`.
    pub fn validation(
        path: impl Into<String>,
        expected: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            path: path.into(),
            expected: expected.into(),
            message: message.into(),
        }
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
