//! Catalog store - the fixed, ordered set of products.
//!
//! The store is seeded once at process start and shared read-only behind an
//! `Arc`. There is no API for mutation.

use super::product::Product;

/// Read-only, ordered product catalog.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Create a store from an explicit list of products.
    ///
    /// Order is preserved and drives the order of search results.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Create the store holding the built-in seed catalog.
    pub fn seeded() -> Self {
        Self::new(seed_products())
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the store.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the store holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::seeded()
    }
}

fn product(
    id: u32,
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    in_stock: bool,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        in_stock,
        payment_link: Some(format!("https://pay.example.com/product/{}", id)),
    }
}

fn seed_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Trailblazer Hiking Shoes / Chaussures de randonnée Trailblazer",
            "Durable hiking shoes for all terrains, waterproof and breathable. \
             Chaussures de randonnée durables pour tous les terrains, imperméables et respirantes.",
            89.99,
            "Hiking / Randonnée",
            true,
        ),
        product(
            2,
            "SpeedRunner Running Shoes / Chaussures de course SpeedRunner",
            "Lightweight running shoes with superior cushioning for long distances. \
             Chaussures de course légères avec un excellent amorti pour les longues distances.",
            74.99,
            "Running / Course",
            true,
        ),
        product(
            3,
            "UrbanWalk Casual Sneakers / Baskets décontractées UrbanWalk",
            "Comfortable sneakers for everyday city walks and casual wear. \
             Baskets confortables pour les promenades en ville et un usage quotidien.",
            59.99,
            "Casual / Décontracté",
            false,
        ),
        product(
            4,
            "AllCourt Basketball Shoes / Chaussures de basketball AllCourt",
            "High-top shoes for maximum ankle support on the court. \
             Chaussures montantes pour un maintien optimal de la cheville sur le terrain.",
            99.99,
            "Basketball / Basket",
            true,
        ),
        product(
            5,
            "ProTurf Soccer Cleats / Chaussures de football ProTurf",
            "Professional-grade cleats for firm ground soccer fields. \
             Chaussures à crampons de qualité professionnelle pour terrains de football secs.",
            84.99,
            "Soccer / Football",
            true,
        ),
    ]
}
