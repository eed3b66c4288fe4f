//! # Validation Module
//!
//! Parsing and validation of the raw text the user types at the prompts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI prompt                                                   │
//! │  └── Reads one line, hands the raw text to this module                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Trims, applies defaults for blank answers                         │
//! │  └── Rejects non-numeric / out-of-range values                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart / Catalog / ExchangeRateTable                           │
//! │  └── Existence checks (product in catalog, item in cart, currency)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use minicart_core::validation::{parse_add_quantity, parse_remove_quantity};
//!
//! assert_eq!(parse_add_quantity("3").unwrap(), 3);
//! assert_eq!(parse_add_quantity("").unwrap(), 1);    // default
//! assert!(parse_add_quantity("abc").is_err());
//!
//! assert_eq!(parse_remove_quantity("").unwrap(), 0); // remove entirely
//! ```

use crate::error::ValidationError;
use crate::{DEFAULT_ADD_QUANTITY, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product ID typed by the user and returns it trimmed.
///
/// ## Rules
/// - Must not be empty
/// - Only letters, digits, hyphens and underscores
///
/// Whether the ID exists is the catalog's concern, not this function's.
///
/// ## Example
/// ```rust
/// use minicart_core::validation::validate_product_id;
///
/// assert_eq!(validate_product_id("  P001 ").unwrap(), "P001");
/// assert!(validate_product_id("").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<String> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "product ID".to_string(),
        });
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "product ID".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(id.to_string())
}

/// Normalizes a currency code: trimmed and upper-cased.
///
/// ## Example
/// ```rust
/// use minicart_core::validation::normalize_currency_code;
///
/// assert_eq!(normalize_currency_code(" eur ").unwrap(), "EUR");
/// assert!(normalize_currency_code("").is_err());
/// assert!(normalize_currency_code("E1R").is_err());
/// ```
pub fn normalize_currency_code(code: &str) -> ValidationResult<String> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "currency".to_string(),
        });
    }

    if !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidFormat {
            field: "currency".to_string(),
            reason: "must contain only letters".to_string(),
        });
    }

    Ok(code.to_ascii_uppercase())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity being added to the cart.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_ITEM_QUANTITY`]
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Parses the answer to "Enter quantity:".
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  addtocart                                                              │
/// │                                                                         │
/// │  Enter quantity: ___                                                    │
/// │       │                                                                 │
/// │       ├── blank?        → 1 (default)                                   │
/// │       ├── not a number? → Error: "quantity has invalid format"          │
/// │       ├── <= 0?         → Error: "quantity must be positive"            │
/// │       ├── > 999?        → Error: "quantity must be between 1 and 999"   │
/// │       └── OK            → Cart::add_item                                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_add_quantity(input: &str) -> ValidationResult<i64> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(DEFAULT_ADD_QUANTITY);
    }

    let qty = parse_integer(input, "quantity")?;
    validate_quantity(qty)?;
    Ok(qty)
}

/// Parses the answer to "Enter quantity to remove (or 0 to remove entirely):".
///
/// Blank means 0, i.e. remove the line item entirely.
pub fn parse_remove_quantity(input: &str) -> ValidationResult<i64> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0);
    }

    let qty = parse_integer(input, "quantity")?;
    if qty < 0 {
        return Err(ValidationError::NotNegative {
            field: "quantity".to_string(),
        });
    }
    Ok(qty)
}

fn parse_integer(input: &str, field: &str) -> ValidationResult<i64> {
    input.parse::<i64>().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("'{}' is not a whole number", input),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_id() {
        assert_eq!(validate_product_id("P001").unwrap(), "P001");
        assert_eq!(validate_product_id(" P003\t").unwrap(), "P003");

        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("   ").is_err());
        assert!(validate_product_id("P 001").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_ITEM_QUANTITY).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert_eq!(
            validate_quantity(MAX_ITEM_QUANTITY + 1),
            Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 1,
                max: MAX_ITEM_QUANTITY,
            })
        );
    }

    #[test]
    fn test_parse_add_quantity() {
        assert_eq!(parse_add_quantity("2").unwrap(), 2);
        assert_eq!(parse_add_quantity(" 7 ").unwrap(), 7);
        assert_eq!(parse_add_quantity("").unwrap(), DEFAULT_ADD_QUANTITY);

        assert_eq!(
            parse_add_quantity("0"),
            Err(ValidationError::MustBePositive {
                field: "quantity".to_string()
            })
        );
        assert!(parse_add_quantity("-3").is_err());
        assert!(matches!(
            parse_add_quantity("two"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(parse_add_quantity("1.5").is_err());
        assert!(matches!(
            parse_add_quantity("100000000000000"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_add_quantity("99999999999999999999"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_remove_quantity() {
        assert_eq!(parse_remove_quantity("0").unwrap(), 0);
        assert_eq!(parse_remove_quantity("").unwrap(), 0);
        assert_eq!(parse_remove_quantity("4").unwrap(), 4);

        assert!(matches!(
            parse_remove_quantity("-1"),
            Err(ValidationError::NotNegative { .. })
        ));
        assert!(parse_remove_quantity("all").is_err());
    }

    #[test]
    fn test_normalize_currency_code() {
        assert_eq!(normalize_currency_code("gbp").unwrap(), "GBP");
        assert!(normalize_currency_code("  ").is_err());
        assert!(normalize_currency_code("US$").is_err());
    }
}
