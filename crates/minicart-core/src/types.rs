//! # Domain Types
//!
//! Core domain types used throughout MiniCart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │  BasisPoints    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id  ("P001")   │   │  Electronics    │   │  bps (u32)      │       │
//! │  │  name           │   │  Fashion        │   │  1000 = 10%     │       │
//! │  │  price (Money)  │   └─────────────────┘   │  8500 = ×0.85   │       │
//! │  │  category       │                         └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Basis Points
// =============================================================================

/// A ratio expressed in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (the Electronics discount)
/// 8500 bps = 0.85 (USD → EUR rate)
///
/// Integer ratios keep every calculation in [`Money`] exact until the
/// single rounding step in [`Money::scale_bps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Creates a ratio from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        BasisPoints(bps)
    }

    /// Returns the ratio in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Checks if the ratio is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Renders the ratio as a decimal multiplier, e.g. `0.85`.
impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 10000;
        let frac = format!("{:04}", self.0 % 10000);
        let frac = frac.trim_end_matches('0');
        let frac = if frac.len() < 2 {
            format!("{:0<2}", frac)
        } else {
            frac.to_string()
        };
        write!(f, "{}.{}", whole, frac)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Product category. Discount rules select line items by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Fashion,
}

impl Category {
    /// Returns the display name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for purchase.
///
/// Products are created once when the catalog is built and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog identifier typed by the user, e.g. `P001`.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit price in the base currency.
    pub price: Money,

    pub category: Category,
}

impl Product {
    /// Creates a product record.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money, category: Category) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            category,
        }
    }
}
