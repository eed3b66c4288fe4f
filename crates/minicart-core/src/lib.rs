//! # minicart-core: Pure Business Logic for MiniCart
//!
//! This crate is the **heart** of MiniCart. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        MiniCart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/cli (Interactive Loop)                    │   │
//! │  │   menu ──► addtocart ──► viewcart ──► checkout ──► exit         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ minicart-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │ catalog  │ │   cart   │ │ discount │ │ currency         │  │   │
//! │  │   │ Product  │ │ LineItem │ │ BOGO     │ │ ExchangeRateTable│  │   │
//! │  │   │ Catalog  │ │ Cart     │ │ 10% off  │ │ convert()        │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • NO LOGGING • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, BasisPoints)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The fixed product catalog
//! - [`cart`] - Cart and line items
//! - [`discount`] - Discount rules and the registry that applies them
//! - [`currency`] - Exchange rate table and conversion
//! - [`checkout`] - Checkout receipt
//! - [`error`] - Domain error types
//! - [`validation`] - Input parsing and validation
//!
//! ## Example Usage
//!
//! ```rust
//! use minicart_core::{Cart, Catalog, DiscountRegistry};
//!
//! let catalog = Catalog::standard();
//! let registry = DiscountRegistry::standard();
//! let mut cart = Cart::new();
//!
//! cart.add_item(&catalog, "P002", 2).unwrap(); // 2 × Phone @ $500.00
//!
//! // 10% off Electronics
//! assert_eq!(registry.apply_all(&cart).cents(), 10000);
//!
//! let receipt = cart.checkout(&registry);
//! assert_eq!(receipt.total.cents(), 90000);
//! assert!(cart.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod currency;
pub mod discount;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use minicart_core::Money` instead of
// `use minicart_core::money::Money`

pub use cart::{Cart, LineItem, RemoveOutcome};
pub use catalog::Catalog;
pub use checkout::CheckoutSummary;
pub use currency::{ConvertedAmount, ExchangeRateTable};
pub use discount::{AppliedDiscount, DiscountRegistry, DiscountRule};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Base currency every catalog price is expressed in.
pub const BASE_CURRENCY: &str = "USD";

/// Quantity used by `addtocart` when the user gives none.
pub const DEFAULT_ADD_QUANTITY: i64 = 1;

/// Maximum quantity of a single line item.
///
/// Keeps `price × quantity` and the cart subtotal well inside `i64` cents.
pub const MAX_ITEM_QUANTITY: i64 = 999;
