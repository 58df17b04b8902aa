//! Core types for the product catalog

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product identifier type
pub type ProductId = i32;

/// A single catalog record
///
/// Serialized with camelCase keys. `price` is written as a bare JSON number
/// carrying the decimal's own digits, so `3.75` never turns into `3.7499...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
        }
    }
}
