//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Cart prices arrive as strings ("1.99"). Parsing them to floats:       │
//! │    1.99 * 2 + 4.50 = 8.479999999999999  ❌ WRONG!                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "1.99" → 199 cents, "4.50" → 450 cents                               │
//! │    199 * 2 + 450 = 848 cents = $8.48    ✅ EXACT                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::parse_amount("4.50").unwrap();
//! assert_eq!(price.cents(), 450);
//!
//! let line_total = price.multiply_quantity(3);
//! assert_eq!(line_total.to_string(), "$13.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Where Money is Used
/// ```text
/// CartLineItem.price ("1.99") ──► parse_amount ──► × quantity ──► subtotal
///                                                                   │
///               order summary: discount, tax, delivery, total ◄─────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a decimal amount string such as `"4.50"` into Money.
    ///
    /// ## Accepted Forms
    /// - `"4.50"`, `"4.5"`, `"4"`, `"4."`, `".5"`
    /// - Surrounding whitespace is ignored
    ///
    /// ## Rejected Forms
    /// - Signs, currency symbols, thousands separators
    /// - More than two fractional digits (`"1.999"`)
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::parse_amount("1.99").unwrap().cents(), 199);
    /// assert_eq!(Money::parse_amount("4.5").unwrap().cents(), 450);
    /// assert!(Money::parse_amount("$4.50").is_err());
    /// ```
    pub fn parse_amount(input: &str) -> Result<Self, ValidationError> {
        let raw = input.trim();
        let (whole, frac) = raw.split_once('.').unwrap_or((raw, ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid_amount("expected a decimal amount such as 4.50"));
        }

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) {
            return Err(invalid_amount("expected a decimal amount such as 4.50"));
        }

        if frac.len() > 2 {
            return Err(invalid_amount("at most two decimal places are allowed"));
        }

        let major: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| invalid_amount("amount is too large"))?
        };

        // "4.5" means 50 cents, not 5
        let minor: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid_amount("bad cents"))? * 10,
            _ => frac.parse().map_err(|_| invalid_amount("bad cents"))?,
        };

        major
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(minor))
            .map(Money)
            .ok_or_else(|| invalid_amount("amount is too large"))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `bps` basis points of this amount, rounded half-up to the cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// // 10% of $8.48 = $0.848 → $0.85
    /// assert_eq!(Money::from_cents(848).portion_bps(1000).cents(), 85);
    /// ```
    pub fn portion_bps(&self, bps: u32) -> Money {
        // i128 keeps large carts from overflowing before the division
        let cents = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Calculates tax on this amount.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::types::TaxRate;
    ///
    /// let taxable = Money::from_cents(1000); // $10.00
    /// let tax = taxable.calculate_tax(TaxRate::from_bps(800)); // 8%
    /// assert_eq!(tax.cents(), 80);
    /// ```
    #[inline]
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        self.portion_bps(rate.bps())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## User Workflow
    /// ```text
    /// Line: Organic Bananas "1.99"
    /// Quantity: 2
    ///      │
    ///      ▼
    /// multiply_quantity(2) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: $3.98
    /// ```
    ///
    /// Saturates at the `i64` bounds instead of wrapping.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (1000 = 10%)
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        *self - self.portion_bps(discount_bps)
    }
}

fn invalid_amount(reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: reason.to_string(),
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$12.34`.
///
/// ## Note
/// Debug-grade formatting. Screens that care about the currency symbol use
/// the shell's configured formatter instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse_amount(s)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_parse_amount_accepted_forms() {
        assert_eq!(Money::parse_amount("1.99").unwrap().cents(), 199);
        assert_eq!(Money::parse_amount("4.50").unwrap().cents(), 450);
        assert_eq!(Money::parse_amount("4.5").unwrap().cents(), 450);
        assert_eq!(Money::parse_amount("4").unwrap().cents(), 400);
        assert_eq!(Money::parse_amount("4.").unwrap().cents(), 400);
        assert_eq!(Money::parse_amount(".05").unwrap().cents(), 5);
        assert_eq!(Money::parse_amount("  3.25 ").unwrap().cents(), 325);
        assert_eq!(Money::parse_amount("0.00").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_amount_rejected_forms() {
        for bad in ["", " ", ".", "abc", "$4.50", "-1.00", "1.999", "1,000.00", "4.5x"] {
            let err = Money::parse_amount(bad).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { ref field, .. } if field == "price"),
                "expected {bad:?} to be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_amount_overflow() {
        assert!(Money::parse_amount("99999999999999999999").is_err());
        assert!(Money::parse_amount("92233720368547758.07").is_ok());
        assert!(Money::parse_amount("92233720368547758.08").is_err());
    }

    #[test]
    fn test_from_str() {
        let money: Money = "5.50".parse().unwrap();
        assert_eq!(money.cents(), 550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let total: Money = [a, b, Money::from_cents(1)].into_iter().sum();
        assert_eq!(total.cents(), 1501);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_cents(i64::MAX - 7);

        assert_eq!(huge.multiply_quantity(2).cents(), i64::MAX);
        assert_eq!((huge + Money::from_cents(100)).cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MIN) - Money::from_cents(1)).cents(), i64::MIN);

        let total: Money = [huge, huge, Money::from_cents(1)].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_float_trap_is_avoided() {
        // 1.99 * 2 + 4.50 drifts in floating point; cents stay exact
        let subtotal = Money::parse_amount("1.99").unwrap().multiply_quantity(2)
            + Money::parse_amount("4.50").unwrap();
        assert_eq!(subtotal.cents(), 848);
    }

    #[test]
    fn test_portion_rounds_half_up() {
        // 10% of $8.48 = 84.8 cents → 85
        assert_eq!(Money::from_cents(848).portion_bps(1000).cents(), 85);
        // 8% of $7.63 = 61.04 cents → 61
        assert_eq!(Money::from_cents(763).portion_bps(800).cents(), 61);
        // 8% of $0.25 = 2.0 cents exactly
        assert_eq!(Money::from_cents(25).portion_bps(800).cents(), 2);
        assert!(Money::from_cents(848).portion_bps(0).is_zero());
    }

    #[test]
    fn test_tax_calculation() {
        let amount = Money::from_cents(1000);
        let tax = amount.calculate_tax(TaxRate::from_bps(800));
        assert_eq!(tax.cents(), 80);
    }

    #[test]
    fn test_percentage_discount() {
        let subtotal = Money::from_cents(10000); // $100.00
        let discounted = subtotal.apply_percentage_discount(1000); // 10%
        assert_eq!(discounted.cents(), 9000);
    }
}
