//! # Configuration State
//!
//! Application configuration resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`MINICART_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup and owned by the session.

use serde::{Deserialize, Serialize};

use minicart_core::{Money, BASE_CURRENCY};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Title shown at the top of the menu
    pub store_name: String,

    /// Base currency code (ISO 4217) every price is in
    pub currency_code: String,

    /// Base currency symbol (for display)
    pub currency_symbol: String,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Mini E-commerce Cart System".to_string(),
            currency_code: BASE_CURRENCY.to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `MINICART_STORE_NAME`: Override the menu title
    /// - `MINICART_CURRENCY_SYMBOL`: Override the base currency symbol
    pub fn from_env() -> CliResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> CliResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("MINICART_STORE_NAME") {
            config.store_name = non_blank("MINICART_STORE_NAME", store_name)?;
        }

        if let Some(symbol) = lookup("MINICART_CURRENCY_SYMBOL") {
            config.currency_symbol = non_blank("MINICART_CURRENCY_SYMBOL", symbol)?;
        }

        Ok(config)
    }

    /// Formats a base-currency amount, e.g. `$12.34`.
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        format!(
            "{}{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }

    /// Formats with the trailing code, e.g. `$12.34 USD`.
    pub fn format_with_code(&self, amount: Money) -> String {
        format!("{} {}", self.format_currency(amount), self.currency_code)
    }
}

fn non_blank(key: &str, value: String) -> CliResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CliError::Config {
            key: key.to_string(),
            reason: "must not be blank".to_string(),
        });
    }
    Ok(trimmed.to_string())
}
