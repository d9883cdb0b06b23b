//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file.

pub mod add;
pub mod calculate;
pub mod search_products;

pub use add::{AddParams, AddTool};
pub use calculate::{CalculateParams, CalculateTool};
pub use search_products::{NO_MATCH_MESSAGE, SearchProductsTool};
