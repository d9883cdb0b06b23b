//! Product record.

use serde::{Deserialize, Serialize};

/// A single catalog entry. Never mutated once the store is seeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Free-form description, searched alongside the name.
    pub description: String,

    /// Unit price, non-negative.
    pub price: f64,

    /// Category label, compared exactly (after normalization) by searches.
    pub category: String,

    /// Whether the product can currently be ordered.
    pub in_stock: bool,

    /// Optional checkout link attached to search results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_link: Option<String>,
}

impl Product {
    /// Human-readable stock label.
    pub fn stock_label(&self) -> &'static str {
        if self.in_stock {
            "In stock"
        } else {
            "Out of stock"
        }
    }

    /// Format this product as a search result line:
    /// `[name] $price (category) - In stock|Out of stock`.
    pub fn summary_line(&self) -> String {
        format!(
            "[{}] ${} ({}) - {}",
            self.name,
            self.price,
            self.category,
            self.stock_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(in_stock: bool) -> Product {
        Product {
            id: 42,
            name: "Test Shoe".to_string(),
            description: "A shoe".to_string(),
            price: 10.5,
            category: "Testing".to_string(),
            in_stock,
            payment_link: None,
        }
    }

    #[test]
    fn test_summary_line_in_stock() {
        assert_eq!(
            sample(true).summary_line(),
            "[Test Shoe] $10.5 (Testing) - In stock"
        );
    }

    #[test]
    fn test_summary_line_out_of_stock() {
        assert_eq!(
            sample(false).summary_line(),
            "[Test Shoe] $10.5 (Testing) - Out of stock"
        );
    }

    #[test]
    fn test_whole_price_has_no_trailing_zeros() {
        let mut product = sample(true);
        product.price = 100.0;
        assert!(product.summary_line().contains("$100 "));
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(sample(true)).unwrap();
        assert_eq!(value["inStock"], serde_json::json!(true));
        assert!(value.get("paymentLink").is_none());
    }
}
