//! # Checkout
//!
//! Turns the cart into a receipt and empties it.
//!
//! ## Checkout Flow
//! ```text
//! Cart.subtotal() ──► DiscountRegistry.breakdown() ──► Σ discounts
//!        │                                                  │
//!        └──────────────► total = subtotal − discount ◄─────┘
//!                                   │
//!                                   ▼
//!                           CheckoutSummary ──► Cart.clear()
//! ```
//!
//! Currency conversion happens after the receipt exists, on
//! [`CheckoutSummary::total`], so the cart is cleared whatever the user
//! answers at the currency prompt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::discount::{AppliedDiscount, DiscountRegistry};
use crate::money::Money;

/// The receipt produced by checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,

    /// Every rule in the registry, including those that gave nothing.
    pub discounts: Vec<AppliedDiscount>,
    pub total_discount: Money,

    /// `subtotal − total_discount`, floored at zero.
    pub total: Money,
    pub completed_at: DateTime<Utc>,
}

impl CheckoutSummary {
    /// Prices a cart without touching it.
    pub fn for_cart(cart: &Cart, registry: &DiscountRegistry) -> Self {
        let subtotal = cart.subtotal();
        let discounts = registry.breakdown(cart);
        let total_discount: Money = discounts.iter().map(|d| d.amount).sum();

        CheckoutSummary {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal,
            discounts,
            total_discount,
            total: (subtotal - total_discount).max(Money::zero()),
            completed_at: Utc::now(),
        }
    }

    /// Compact JSON form, used for structured logging.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Cart {
    /// Prices the cart, then clears it.
    ///
    /// ## Example
    /// ```rust
    /// use minicart_core::{Cart, Catalog, DiscountRegistry};
    ///
    /// let catalog = Catalog::standard();
    /// let mut cart = Cart::new();
    /// cart.add_item(&catalog, "P003", 3).unwrap();
    ///
    /// let receipt = cart.checkout(&DiscountRegistry::standard());
    /// assert_eq!(receipt.subtotal.cents(), 6000);
    /// assert_eq!(receipt.total.cents(), 4000);
    /// assert!(cart.is_empty());
    /// ```
    pub fn checkout(&mut self, registry: &DiscountRegistry) -> CheckoutSummary {
        let summary = CheckoutSummary::for_cart(self, registry);
        self.clear();
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::currency::ExchangeRateTable;

    #[test]
    fn test_checkout_total_is_subtotal_minus_discounts() {
        let catalog = Catalog::standard();
        let registry = DiscountRegistry::standard();
        let mut cart = Cart::new();
        cart.add_item(&catalog, "P002", 2).unwrap(); // $1000.00, 10% → $100.00
        cart.add_item(&catalog, "P003", 3).unwrap(); // $60.00, BOGO → $20.00

        let summary = cart.checkout(&registry);

        assert_eq!(summary.subtotal.cents(), 106000);
        assert_eq!(summary.total_discount.cents(), 12000);
        assert_eq!(summary.total.cents(), 94000);
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_quantity, 5);
    }

    #[test]
    fn test_checkout_at_quantity_limit() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_item(&catalog, "P001", crate::MAX_ITEM_QUANTITY).unwrap();
        cart.add_item(&catalog, "P003", crate::MAX_ITEM_QUANTITY).unwrap();

        let summary = cart.checkout(&DiscountRegistry::standard());

        // $99,900.00 + $1,998.00, minus $9,990.00 (10%) and 499 free shirts
        assert_eq!(summary.subtotal.cents(), 101_898_000);
        assert_eq!(summary.total_discount.cents(), 10_988_000);
        assert_eq!(summary.total.cents(), 90_910_000);

        let gbp = ExchangeRateTable::standard()
            .convert(summary.total, "GBP")
            .unwrap();
        assert_eq!(gbp.amount.cents(), 68_182_500);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_always_empties_cart() {
        let catalog = Catalog::standard();
        let registry = DiscountRegistry::standard();
        let rates = ExchangeRateTable::standard();
        let mut cart = Cart::new();
        cart.add_item(&catalog, "P001", 1).unwrap();

        let summary = cart.checkout(&registry);
        assert!(cart.is_empty());

        // An unknown currency afterwards doesn't bring anything back
        assert!(rates.convert(summary.total, "XYZ").is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_empty_cart() {
        let registry = DiscountRegistry::standard();
        let mut cart = Cart::new();

        let summary = cart.checkout(&registry);
        assert!(summary.total.is_zero());
        assert_eq!(summary.discounts.len(), 2);
    }

    #[test]
    fn test_for_cart_does_not_clear() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_item(&catalog, "P003", 2).unwrap();

        let summary = CheckoutSummary::for_cart(&cart, &DiscountRegistry::standard());
        assert_eq!(summary.total.cents(), 2000);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_summary_json_uses_camel_case() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_item(&catalog, "P001", 1).unwrap();

        let json = cart.checkout(&DiscountRegistry::standard()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["subtotal"], 100000);
        assert_eq!(value["totalDiscount"], 10000);
        assert_eq!(value["total"], 90000);
        assert_eq!(value["discounts"][1]["rule"], "TenPercentOffElectronics");
    }
}
