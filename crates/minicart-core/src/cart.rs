//! # Cart
//!
//! The shopping cart: one line item per product, in the order products
//! were first added.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Menu Command            Cart Method             State Change           │
//! │  ────────────            ───────────             ────────────           │
//! │                                                                         │
//! │  addtocart ─────────────► add_item() ──────────► qty += n / push item  │
//! │                                                                         │
//! │  removefromcart ────────► remove_item() ───────► qty -= n / drop item  │
//! │                                                                         │
//! │  clearcart ─────────────► clear() ─────────────► items.clear()         │
//! │                                                                         │
//! │  checkout ──────────────► checkout() ──────────► receipt, then clear   │
//! │                                                                         │
//! │  viewcart ──────────────► items(), subtotal() ─► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_quantity;
use crate::MAX_ITEM_QUANTITY;

/// An item in the shopping cart.
///
/// ## Design Notes
/// The product is a snapshot taken from the catalog when the item was first
/// added, so the cart never needs to go back to the catalog to price itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product: Product,

    /// Always >= 1; a line item that would reach 0 is removed instead.
    pub quantity: i64,
}

impl LineItem {
    pub fn new(product: Product, quantity: i64) -> Self {
        LineItem { product, quantity }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

/// What `remove_item` did to the line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The line item is gone. `name` was captured before removal.
    Removed { name: String },

    /// The quantity went down but the line item stays.
    Reduced {
        name: String,
        removed: i64,
        remaining: i64,
    },
}

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by product ID (adding the same product increases quantity)
/// - Every quantity is > 0 (reaching 0 removes the item)
/// - Every product ID came from the catalog passed to `add_item`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<LineItem>,

    /// When the cart was created/last cleared
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a catalog product to the cart or increases its quantity.
    ///
    /// ## Behavior
    /// - Unknown product ID: `ProductNotFound`, cart unchanged
    /// - Quantity outside 1..=999: validation error, cart unchanged
    /// - Product already in cart: quantity increases, up to 999 in total
    /// - Otherwise: new line item
    ///
    /// ## Returns
    /// The line item after the change.
    pub fn add_item(
        &mut self,
        catalog: &Catalog,
        product_id: &str,
        quantity: i64,
    ) -> CoreResult<&LineItem> {
        validate_quantity(quantity)?;

        let product = catalog
            .find(product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

        match self.position(product_id) {
            Some(index) => {
                let current = self.items[index].quantity;
                if current + quantity > MAX_ITEM_QUANTITY {
                    return Err(CoreError::QuantityLimitExceeded {
                        product_id: product_id.to_string(),
                        current,
                        adding: quantity,
                        max: MAX_ITEM_QUANTITY,
                    });
                }
                self.items[index].quantity = current + quantity;
                Ok(&self.items[index])
            }
            None => {
                self.items.push(LineItem::new(product.clone(), quantity));
                Ok(&self.items[self.items.len() - 1])
            }
        }
    }

    /// Removes some or all of a product from the cart.
    ///
    /// ## Behavior
    /// - Product not in cart: `NotInCart`
    /// - Quantity 0, or >= current quantity: line item removed entirely
    /// - Otherwise: quantity decremented in place
    pub fn remove_item(&mut self, product_id: &str, quantity: i64) -> CoreResult<RemoveOutcome> {
        if quantity < 0 {
            return Err(ValidationError::NotNegative {
                field: "quantity".to_string(),
            }
            .into());
        }

        let index = self
            .position(product_id)
            .ok_or_else(|| CoreError::NotInCart(product_id.to_string()))?;

        if quantity == 0 || quantity >= self.items[index].quantity {
            let removed = self.items.remove(index);
            return Ok(RemoveOutcome::Removed {
                name: removed.product.name,
            });
        }

        let item = &mut self.items[index];
        item.quantity -= quantity;
        Ok(RemoveOutcome::Reduced {
            name: item.product.name.clone(),
            removed: quantity,
            remaining: item.quantity,
        })
    }

    /// Returns the line item for a product, if present.
    pub fn get(&self, product_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the number of unique items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of all line totals, before discounts.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.product.id == product_id)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_add_item() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();

        let item = cart.add_item(&catalog, "P003", 2).unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.total().cents(), 4000);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal().cents(), 4000); // $40.00
    }

    #[test]
    fn test_cart_add_same_product_accumulates() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();

        cart.add_item(&catalog, "P002", 3).unwrap();
        cart.add_item(&catalog, "P002", 3).unwrap();

        assert_eq!(cart.item_count(), 1); // Still one unique item
        assert_eq!(cart.get("P002").unwrap().quantity, 6);
    }

    #[test]
    fn test_cart_add_unknown_product_leaves_cart_unchanged() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_item(&catalog, "P001", 1).unwrap();

        let err = cart.add_item(&catalog, "P999", 1).unwrap_err();
        assert_eq!(err, CoreError::ProductNotFound("P999".to_string()));
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 1);
    }

    #[test]
    fn test_cart_add_rejects_non_positive_quantity() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();

        let err = cart.add_item(&catalog, "P001", 0).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { .. })
        ));
        assert!(cart.add_item(&catalog, "P001", -2).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_add_rejects_quantity_over_limit() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();

        let err = cart.add_item(&catalog, "P001", 100_000_000_000_000).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));
        assert!(cart.add_item(&catalog, "P003", i64::MAX).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_accumulated_quantity_is_capped() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();

        cart.add_item(&catalog, "P003", 900).unwrap();
        let err = cart.add_item(&catalog, "P003", 100).unwrap_err();
        assert_eq!(
            err,
            CoreError::QuantityLimitExceeded {
                product_id: "P003".to_string(),
                current: 900,
                adding: 100,
                max: MAX_ITEM_QUANTITY,
            }
        );
        assert_eq!(cart.get("P003").unwrap().quantity, 900);

        cart.add_item(&catalog, "P003", 99).unwrap();
        assert_eq!(cart.get("P003").unwrap().quantity, MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_full_cart_prices_without_overflow() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        for product in catalog.products() {
            cart.add_item(&catalog, &product.id, MAX_ITEM_QUANTITY).unwrap();
        }

        // 999 × ($1000 + $500 + $20)
        assert_eq!(cart.subtotal().cents(), 999 * 152_000);
        assert_eq!(cart.total_quantity(), 3 * MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_remove_zero_deletes_line_item() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_item(&catalog, "P001", 5).unwrap();

        let outcome = cart.remove_item("P001", 0).unwrap();
        assert_eq!(
            outcome,
            RemoveOutcome::Removed {
                name: "Laptop".to_string()
            }
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_more_than_quantity_deletes_line_item() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_item(&catalog, "P003", 2).unwrap();

        let outcome = cart.remove_item("P003", 10).unwrap();
        assert!(matches!(outcome, RemoveOutcome::Removed { .. }));
        assert!(cart.get("P003").is_none());
    }

    #[test]
    fn test_remove_partial_decrements() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_item(&catalog, "P003", 5).unwrap();

        let outcome = cart.remove_item("P003", 2).unwrap();
        assert_eq!(
            outcome,
            RemoveOutcome::Reduced {
                name: "T-shirt".to_string(),
                removed: 2,
                remaining: 3,
            }
        );
        assert_eq!(cart.get("P003").unwrap().quantity, 3);
    }

    #[test]
    fn test_remove_absent_product() {
        let mut cart = Cart::new();
        let err = cart.remove_item("P002", 1).unwrap_err();
        assert_eq!(err, CoreError::NotInCart("P002".to_string()));
    }

    #[test]
    fn test_remove_negative_quantity_is_rejected() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_item(&catalog, "P002", 1).unwrap();

        assert!(cart.remove_item("P002", -1).is_err());
        assert_eq!(cart.get("P002").unwrap().quantity, 1);
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_item(&catalog, "P003", 1).unwrap();
        cart.add_item(&catalog, "P001", 1).unwrap();
        cart.add_item(&catalog, "P003", 1).unwrap();

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product.id.as_str()).collect();
        assert_eq!(ids, vec!["P003", "P001"]);
    }

    #[test]
    fn test_cart_clear() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_item(&catalog, "P001", 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.subtotal().is_zero());
    }
}
