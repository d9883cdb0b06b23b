//! Domains module containing business logic organized by bounded contexts.
//!
//! - **arithmetic**: pure calculator functions
//! - **catalog**: the static product catalog and its search engine
//! - **tools**: MCP tools, their registry and the dispatcher

pub mod arithmetic;
pub mod catalog;
pub mod tools;
