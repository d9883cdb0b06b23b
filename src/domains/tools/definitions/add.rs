//! Addition tool definition.

use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::domains::arithmetic;
use crate::domains::tools::envelope::ResultEnvelope;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::ToolHandler;
use crate::domains::tools::registry::ToolDescriptor;
use crate::domains::tools::schema::{FieldType, InputShape, ValidatedArgs};

/// Parameters for the add tool.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AddParams {
    pub a: f64,
    pub b: f64,
}

/// Add tool - returns the sum of two numbers.
#[derive(Debug, Clone, Copy)]
pub struct AddTool;

impl AddTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add two numbers and return the sum.";

    /// Declared parameters.
    pub fn input_shape() -> InputShape {
        InputShape::new()
            .required("a", FieldType::Number)
            .required("b", FieldType::Number)
    }

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(params: &AddParams) -> ResultEnvelope {
        let sum = arithmetic::add(params.a, params.b);
        debug!("{} + {} = {}", params.a, params.b, sum);
        ResultEnvelope::text(sum.to_string())
    }

    /// Registry entry for this tool.
    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(
            Self::NAME,
            Self::DESCRIPTION,
            Self::input_shape(),
            Arc::new(Self),
        )
    }
}

impl ToolHandler for AddTool {
    fn call(&self, args: &ValidatedArgs) -> Result<ResultEnvelope, ToolError> {
        let params: AddParams = args.parse()?;
        Ok(Self::execute(&params))
    }
}
