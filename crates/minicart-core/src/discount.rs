//! # Discount Rules
//!
//! A closed set of discount rules and the registry that applies them.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BuyOneGetOneFreeFashion                                                │
//! │    for each Fashion item with qty >= 2:                                 │
//! │      discount += floor(qty / 2) × unit price                           │
//! │                                                                         │
//! │  TenPercentOffElectronics                                               │
//! │    for each Electronics item:                                           │
//! │      discount += 10% × line total (rounded to the cent)                │
//! │                                                                         │
//! │  Registry: total discount = Σ rule.apply(cart)                          │
//! │  Rules never see each other's output; order only affects listing.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::money::Money;
use crate::types::{BasisPoints, Category};

/// Electronics discount rate: 10%.
const ELECTRONICS_DISCOUNT: BasisPoints = BasisPoints::from_bps(1000);

/// A stateless discount policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscountRule {
    BuyOneGetOneFreeFashion,
    TenPercentOffElectronics,
}

impl DiscountRule {
    pub const fn name(&self) -> &'static str {
        match self {
            DiscountRule::BuyOneGetOneFreeFashion => "Buy 1 Get 1 Free on Fashion",
            DiscountRule::TenPercentOffElectronics => "10% Off on Electronics",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            DiscountRule::BuyOneGetOneFreeFashion => "Buy 1 Get 1 Free for Fashion category items.",
            DiscountRule::TenPercentOffElectronics => "10% discount on all Electronics items.",
        }
    }

    /// Computes this rule's discount for the cart's current contents.
    ///
    /// Never negative, and never more than the subtotal of the items the
    /// rule looks at.
    ///
    /// ## Example
    /// ```rust
    /// use minicart_core::{Cart, Catalog, DiscountRule};
    ///
    /// let catalog = Catalog::standard();
    /// let mut cart = Cart::new();
    /// cart.add_item(&catalog, "P003", 3).unwrap(); // 3 × T-shirt @ $20.00
    ///
    /// let discount = DiscountRule::BuyOneGetOneFreeFashion.apply(&cart);
    /// assert_eq!(discount.cents(), 2000); // one shirt free
    /// ```
    pub fn apply(&self, cart: &Cart) -> Money {
        match self {
            DiscountRule::BuyOneGetOneFreeFashion => cart
                .items()
                .iter()
                .filter(|item| item.product.category == Category::Fashion && item.quantity >= 2)
                .map(|item| item.product.price.multiply_quantity(item.quantity / 2))
                .sum(),
            DiscountRule::TenPercentOffElectronics => cart
                .items()
                .iter()
                .filter(|item| item.product.category == Category::Electronics)
                .map(|item| item.total().scale_bps(ELECTRONICS_DISCOUNT))
                .sum(),
        }
    }
}

/// One rule's contribution to a cart's discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedDiscount {
    pub rule: DiscountRule,
    pub name: String,
    pub amount: Money,
}

/// The fixed, ordered collection of active discount rules.
#[derive(Debug, Clone)]
pub struct DiscountRegistry {
    rules: Vec<DiscountRule>,
}

impl DiscountRegistry {
    /// Both rules, in listing order.
    pub fn standard() -> Self {
        DiscountRegistry {
            rules: vec![
                DiscountRule::BuyOneGetOneFreeFashion,
                DiscountRule::TenPercentOffElectronics,
            ],
        }
    }

    /// Rules in listing order.
    pub fn rules(&self) -> &[DiscountRule] {
        &self.rules
    }

    /// Each rule's discount for the cart, in listing order.
    pub fn breakdown(&self, cart: &Cart) -> Vec<AppliedDiscount> {
        self.rules
            .iter()
            .map(|rule| AppliedDiscount {
                rule: *rule,
                name: rule.name().to_string(),
                amount: rule.apply(cart),
            })
            .collect()
    }

    /// Sum of every rule's independent discount.
    pub fn apply_all(&self, cart: &Cart) -> Money {
        self.rules.iter().map(|rule| rule.apply(cart)).sum()
    }
}

impl Default for DiscountRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
