//! # CLI Error Type
//!
//! Errors for the interactive application, and the mapping from domain
//! errors to what the user sees.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in MiniCart                               │
//! │                                                                         │
//! │  Session command                                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CoreError (product not found, bad quantity, unknown currency...)      │
//! │         │                                                               │
//! │         ├──► user_message() ──► printed, loop continues                │
//! │         └──► ErrorCode       ──► warn! log field                       │
//! │                                                                         │
//! │  CliError (terminal I/O, bad configuration)                            │
//! │         │                                                               │
//! │         └──► propagated out of run() ──► exit code 1                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use minicart_core::CoreError;
use thiserror::Error;

/// Fatal application errors. Anything the user can fix by typing something
/// else is a [`CoreError`] instead.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the terminal or writing to it failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// An environment override had an unusable value.
    #[error("Invalid configuration for {key}: {reason}")]
    Config { key: String, reason: String },
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;

/// Machine-readable classification of a domain error, for log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotFound,
    ValidationError,
    CartError,
    CurrencyError,
}

impl ErrorCode {
    pub fn of(err: &CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(_) => ErrorCode::NotFound,
            CoreError::NotInCart(_) | CoreError::QuantityLimitExceeded { .. } => {
                ErrorCode::CartError
            }
            CoreError::UnknownCurrency(_) => ErrorCode::CurrencyError,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::CartError => "CART_ERROR",
            ErrorCode::CurrencyError => "CURRENCY_ERROR",
        }
    }
}

/// The line printed to the user for a rejected operation.
pub fn user_message(err: &CoreError) -> String {
    match err {
        CoreError::ProductNotFound(_) => "Product not found.".to_string(),
        CoreError::NotInCart(_) => err.to_string(),
        CoreError::UnknownCurrency(_) => "Invalid currency selected.".to_string(),
        CoreError::QuantityLimitExceeded { .. } => err.to_string(),
        CoreError::Validation(inner) => format!("Invalid input: {}.", inner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minicart_core::ValidationError;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            user_message(&CoreError::ProductNotFound("P9".to_string())),
            "Product not found."
        );
        assert_eq!(
            user_message(&CoreError::NotInCart("P002".to_string())),
            "Product P002 is not in the cart."
        );
        assert_eq!(
            user_message(&CoreError::UnknownCurrency("JPY".to_string())),
            "Invalid currency selected."
        );

        let err: CoreError = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        }
        .into();
        assert_eq!(user_message(&err), "Invalid input: quantity must be positive.");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ErrorCode::of(&CoreError::ProductNotFound("x".to_string())).as_str(),
            "NOT_FOUND"
        );
        assert_eq!(
            ErrorCode::of(&CoreError::NotInCart("x".to_string())),
            ErrorCode::CartError
        );

        let limit = CoreError::QuantityLimitExceeded {
            product_id: "P003".to_string(),
            current: 999,
            adding: 1,
            max: 999,
        };
        assert_eq!(ErrorCode::of(&limit), ErrorCode::CartError);
        assert_eq!(
            user_message(&limit),
            "Cannot add 1 more of P003: the cart holds 999 and the limit is 999."
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: CliError = io.into();
        assert!(err.to_string().starts_with("Terminal I/O failed"));
    }
}
