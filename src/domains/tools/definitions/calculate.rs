//! Calculator tool definition.
//!
//! Supports add, subtract, multiply and divide. Dividing by zero returns an
//! explanatory text result rather than failing the call.

use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::domains::arithmetic::{self, Operation, Outcome};
use crate::domains::tools::envelope::ResultEnvelope;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::ToolHandler;
use crate::domains::tools::registry::ToolDescriptor;
use crate::domains::tools::schema::{FieldType, InputShape, ValidatedArgs};

/// Parameters for the calculate tool.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CalculateParams {
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
}

/// Calculate tool - applies one of four arithmetic operations.
#[derive(Debug, Clone, Copy)]
pub struct CalculateTool;

impl CalculateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calculate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Perform a calculation (add, subtract, multiply or divide) on two numbers.";

    /// Declared parameters.
    pub fn input_shape() -> InputShape {
        InputShape::new()
            .required("operation", FieldType::one_of(Operation::NAMES))
            .required("a", FieldType::Number)
            .required("b", FieldType::Number)
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(operation = %params.operation))]
    pub fn execute(params: &CalculateParams) -> ResultEnvelope {
        let outcome = arithmetic::calculate(params.operation, params.a, params.b);
        if outcome == Outcome::DivideByZero {
            debug!("Division by zero requested");
        }
        ResultEnvelope::text(outcome.to_text())
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

impl ToolHandler for CalculateTool {
    fn call(&self, args: &ValidatedArgs) -> Result<ResultEnvelope, ToolError> {
        let params: CalculateParams = args.parse()?;
        Ok(Self::execute(&params))
    }
}
