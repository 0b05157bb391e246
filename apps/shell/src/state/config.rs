//! # Configuration State
//!
//! Storefront settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no lock is needed.

use serde::{Deserialize, Serialize};
use storefront_core::types::bps_from_percentage;
use storefront_core::{Money, TaxRate};
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Storefront configuration.
///
/// ## Fields
/// The money settings feed the order summary shown on the cart screen.
/// None of them affect the cart itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Tax rate applied to the discounted subtotal, in basis points
    pub tax_rate_bps: u32,

    /// Discount granted by a discount code, in basis points
    pub discount_rate_bps: u32,

    /// Flat delivery fee in cents
    pub delivery_fee_cents: i64,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Currency: USD ($)
    /// - Tax: 8%
    /// - Discount code: 10% off
    /// - Delivery: $5.00 flat
    fn default() -> Self {
        ConfigState {
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            tax_rate_bps: 800,
            discount_rate_bps: 1000,
            delivery_fee_cents: 500,
        }
    }
}

impl ConfigState {
    /// Loads configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_CURRENCY_SYMBOL`: e.g. `"€"`
    /// - `STOREFRONT_TAX_RATE`: percent, e.g. `"8.25"`
    /// - `STOREFRONT_DISCOUNT_RATE`: percent, e.g. `"10"`
    /// - `STOREFRONT_DELIVERY_FEE`: amount, e.g. `"5.00"`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`ConfigState::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(symbol) = lookup("STOREFRONT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("STOREFRONT_TAX_RATE") {
            config.tax_rate_bps = parse_percentage("STOREFRONT_TAX_RATE", &raw)?;
        }

        if let Some(raw) = lookup("STOREFRONT_DISCOUNT_RATE") {
            config.discount_rate_bps = parse_percentage("STOREFRONT_DISCOUNT_RATE", &raw)?;
        }

        if let Some(raw) = lookup("STOREFRONT_DELIVERY_FEE") {
            config.delivery_fee_cents = Money::parse_amount(&raw)
                .map_err(|e| ConfigError::InvalidValue {
                    var: "STOREFRONT_DELIVERY_FEE".to_string(),
                    reason: e.to_string(),
                })?
                .cents();
        }

        Ok(config)
    }

    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    pub fn delivery_fee(&self) -> Money {
        Money::from_cents(self.delivery_fee_cents)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

/// Parses a percentage between 0 and 100 into basis points.
fn parse_percentage(var: &str, raw: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidValue {
        var: var.to_string(),
        reason: reason.to_string(),
    };

    let pct: f64 = raw
        .trim()
        .parse()
        .map_err(|_| invalid("expected a percentage such as 8.25"))?;

    if !(0.0..=100.0).contains(&pct) {
        return Err(invalid("must be between 0 and 100"));
    }

    Ok(bps_from_percentage(pct))
}
