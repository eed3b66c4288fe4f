//! # Currency Conversion
//!
//! Static exchange rates from the base currency (USD), used only at
//! checkout to show the total in another currency.
//!
//! ## Standard Rates
//! ```text
//!   1 USD = 0.85 EUR   (8500 bps)
//!   1 USD = 0.75 GBP   (7500 bps)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::BasisPoints;

/// A total expressed in a foreign currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertedAmount {
    /// Upper-case currency code, e.g. `EUR`.
    pub currency: String,

    /// Amount in that currency's minor unit.
    pub amount: Money,

    pub rate: BasisPoints,
}

impl ConvertedAmount {
    /// `85.00 EUR`
    pub fn display(&self) -> String {
        format!("{} {}", self.amount.to_decimal_string(), self.currency)
    }
}

/// Fixed mapping from currency code to a positive multiplier.
#[derive(Debug, Clone)]
pub struct ExchangeRateTable {
    rates: Vec<(String, BasisPoints)>,
}

impl ExchangeRateTable {
    /// EUR 0.85 and GBP 0.75.
    pub fn standard() -> Self {
        ExchangeRateTable {
            rates: vec![
                ("EUR".to_string(), BasisPoints::from_bps(8500)),
                ("GBP".to_string(), BasisPoints::from_bps(7500)),
            ],
        }
    }

    /// Rate for a code; the lookup is case-insensitive.
    pub fn rate(&self, code: &str) -> Option<BasisPoints> {
        let code = code.trim();
        self.rates
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(code))
            .map(|(_, rate)| *rate)
    }

    /// Supported codes in table order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.iter().map(|(code, _)| code.as_str())
    }

    /// Converts a base-currency amount.
    ///
    /// ## Example
    /// ```rust
    /// use minicart_core::{ExchangeRateTable, Money};
    ///
    /// let rates = ExchangeRateTable::standard();
    /// let eur = rates.convert(Money::from_cents(10000), "eur").unwrap();
    /// assert_eq!(eur.display(), "85.00 EUR");
    ///
    /// assert!(rates.convert(Money::from_cents(10000), "JPY").is_err());
    /// ```
    pub fn convert(&self, amount: Money, code: &str) -> CoreResult<ConvertedAmount> {
        let rate = self
            .rate(code)
            .ok_or_else(|| CoreError::UnknownCurrency(code.trim().to_ascii_uppercase()))?;

        Ok(ConvertedAmount {
            currency: code.trim().to_ascii_uppercase(),
            amount: amount.scale_bps(rate),
            rate,
        })
    }
}

impl Default for ExchangeRateTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_eur() {
        // 100.00 × 0.85 = 85.00
        let rates = ExchangeRateTable::standard();
        let converted = rates.convert(Money::from_cents(10000), "EUR").unwrap();
        assert_eq!(converted.amount.cents(), 8500);
        assert_eq!(converted.currency, "EUR");
        assert_eq!(converted.rate.bps(), 8500);
    }

    #[test]
    fn test_convert_is_case_insensitive() {
        let rates = ExchangeRateTable::standard();
        let converted = rates.convert(Money::from_cents(90000), " gbp ").unwrap();
        assert_eq!(converted.amount.cents(), 67500);
        assert_eq!(converted.display(), "675.00 GBP");
    }

    #[test]
    fn test_unknown_currency() {
        let rates = ExchangeRateTable::standard();
        let err = rates.convert(Money::from_cents(100), "jpy").unwrap_err();
        assert_eq!(err, CoreError::UnknownCurrency("JPY".to_string()));
    }

    #[test]
    fn test_codes_in_order() {
        let rates = ExchangeRateTable::standard();
        assert_eq!(rates.codes().collect::<Vec<_>>(), vec!["EUR", "GBP"]);
    }

}
