//! In-memory product catalog
//!
//! The catalog is built once before the server starts accepting requests and
//! is never modified afterwards, so it can be shared across request tasks
//! without locking.

use rust_decimal::Decimal;

use crate::types::{Product, ProductId};

/// Fixed, ordered collection of products
#[derive(Debug, Clone)]
pub struct Catalog {
    products: [Product; 3],
}

impl Catalog {
    /// Build the catalog with its three built-in products
    pub fn seeded() -> Self {
        Self {
            products: [
                Product::new(1, "Tomato Soup", "Groceries", Decimal::new(1, 0)),
                Product::new(2, "Yo-yo", "Toys", Decimal::new(375, 2)),
                Product::new(3, "Hammer", "Hardware", Decimal::new(1699, 2)),
            ],
        }
    }

    /// All products in stored order
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id; the first match in stored order wins
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
