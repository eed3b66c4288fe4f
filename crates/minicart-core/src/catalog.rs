//! # Product Catalog
//!
//! The fixed list of purchasable products, built once at startup.
//!
//! ## Standard Catalog
//! ```text
//! ┌────────┬──────────┬──────────┬─────────────┐
//! │  ID    │  Name    │  Price   │  Category   │
//! ├────────┼──────────┼──────────┼─────────────┤
//! │  P001  │  Laptop  │ $1000.00 │ Electronics │
//! │  P002  │  Phone   │  $500.00 │ Electronics │
//! │  P003  │  T-shirt │   $20.00 │ Fashion     │
//! └────────┴──────────┴──────────┴─────────────┘
//! ```

use crate::money::Money;
use crate::types::{Category, Product};

/// Standard catalog rows: (id, name, dollars, category).
const STANDARD_PRODUCTS: &[(&str, &str, i64, Category)] = &[
    ("P001", "Laptop", 1000, Category::Electronics),
    ("P002", "Phone", 500, Category::Electronics),
    ("P003", "T-shirt", 20, Category::Fashion),
];

/// An ordered, read-only product list with unique IDs.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The three-product catalog the shop starts with.
    pub fn standard() -> Self {
        let products = STANDARD_PRODUCTS
            .iter()
            .map(|&(id, name, dollars, category)| {
                Product::new(id, name, Money::from_major_minor(dollars, 0), category)
            })
            .collect();

        Catalog { products }
    }

    /// Looks up a product by exact ID.
    pub fn find(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
