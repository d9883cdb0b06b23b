//! Product search tool definition.
//!
//! Wraps the catalog search engine. Each match becomes one text item carrying
//! the product's payment link; an empty result is reported as a single text
//! item, not as an error.

use std::sync::Arc;
use tracing::{info, instrument};

use crate::domains::catalog::{self, CatalogStore, SearchQuery};
use crate::domains::tools::envelope::{ContentItem, ResultEnvelope};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::ToolHandler;
use crate::domains::tools::registry::ToolDescriptor;
use crate::domains::tools::schema::{FieldType, InputShape, ValidatedArgs};

/// Text returned when nothing matches.
pub const NO_MATCH_MESSAGE: &str = "No products found matching your search.";

/// Search products tool - bound to a catalog store.
#[derive(Debug, Clone)]
pub struct SearchProductsTool {
    catalog: Arc<CatalogStore>,
}

impl SearchProductsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_products";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search the product catalog by name or description, \
         optionally filtered by category and stock availability. Matching ignores case and accents.";

    /// Create the tool over `catalog`.
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Declared parameters.
    pub fn input_shape() -> InputShape {
        InputShape::new()
            .required("query", FieldType::String)
            .describe("Search term for product name or description")
            .optional("category", FieldType::String)
            .describe("Optional product category filter")
            .optional("inStock", FieldType::Boolean)
            .describe("Filter by stock availability")
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(query = %query.query))]
    pub fn execute(&self, query: &SearchQuery) -> Result<ResultEnvelope, ToolError> {
        let matches = catalog::search(&self.catalog, query);
        info!("Product search returned {} result(s)", matches.len());

        if matches.is_empty() {
            return Ok(ResultEnvelope::text(NO_MATCH_MESSAGE));
        }

        let items = matches
            .into_iter()
            .map(|p| ContentItem::text(p.summary_line()).with_payment_link(p.payment_link.clone()))
            .collect();
        ResultEnvelope::from_items(items)
    }

    /// Registry entry for this tool.
    pub fn descriptor(catalog: Arc<CatalogStore>) -> ToolDescriptor {
        ToolDescriptor::new(
            Self::NAME,
            Self::DESCRIPTION,
            Self::input_shape(),
            Arc::new(Self::new(catalog)),
        )
    }
}

impl ToolHandler for SearchProductsTool {
    fn call(&self, args: &ValidatedArgs) -> Result<ResultEnvelope, ToolError> {
        let query: SearchQuery = args.parse()?;
        self.execute(&query)
    }
}
