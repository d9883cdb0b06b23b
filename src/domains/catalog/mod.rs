//! Catalog domain module.
//!
//! Holds the static product catalog and the search engine that runs over it.
//!
//! - `product.rs` - the immutable product record
//! - `store.rs` - the seeded, read-only catalog store
//! - `search.rs` - text normalization and multi-field filtering

mod product;
mod search;
mod store;

pub use product::Product;
pub use search::{SearchQuery, normalize, search};
pub use store::CatalogStore;
