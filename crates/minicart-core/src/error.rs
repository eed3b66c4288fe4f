//! # Error Types
//!
//! Domain-specific error types for minicart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  minicart-core errors (this file)                                      │
//! │  ├── CoreError        - Cart / catalog / currency failures             │
//! │  └── ValidationError  - Malformed user input                           │
//! │                                                                         │
//! │  minicart-cli errors (app)                                             │
//! │  └── CliError         - Terminal I/O failures (fatal)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → printed to user, loop continues   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product ID, currency code)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Every variant is recoverable: the interactive loop reports it and keeps
/// going with the cart unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Product ID doesn't exist in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Remove was requested for a product that has no line item.
    #[error("Product {0} is not in the cart.")]
    NotInCart(String),

    /// Currency code is not in the exchange rate table.
    #[error("Invalid currency selected: {0}")]
    UnknownCurrency(String),

    /// Adding would push a line item past the per-item quantity limit.
    #[error("Cannot add {adding} more of {product_id}: the cart holds {current} and the limit is {max}.")]
    QuantityLimitExceeded {
        product_id: String,
        current: i64,
        adding: i64,
        max: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    NotNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., non-numeric quantity).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::NotInCart("P001".to_string());
        assert_eq!(err.to_string(), "Product P001 is not in the cart.");

        let err = CoreError::ProductNotFound("P999".to_string());
        assert_eq!(err.to_string(), "Product not found: P999");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "product ID".to_string(),
        };
        assert_eq!(err.to_string(), "product ID is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 999,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 999");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::NotNegative {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
