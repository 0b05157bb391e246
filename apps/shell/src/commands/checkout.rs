//! # Checkout Commands
//!
//! The order summary shown under the cart list.
//!
//! Discount, tax and delivery are presentation arithmetic over the cart
//! subtotal. The cart never stores any of it.
//!
//! ```text
//! subtotal                         $8.48
//! discount (code, 10%)            -$0.85
//! tax (8% of discounted)           $0.61
//! delivery (flat)                  $5.00
//! ─────────────────────────────────────
//! total                           $13.24
//! ```

use serde::Serialize;
use storefront_core::{Money, ValidationError};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartStore, ConfigState};

/// Order summary amounts, in cents and pre-formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub tax_cents: i64,
    pub delivery_fee_cents: i64,
    pub total_cents: i64,
    pub discount_applied: bool,
    pub display: SummaryDisplay,
}

/// The same amounts formatted with the configured currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDisplay {
    pub subtotal: String,
    pub discount: String,
    pub tax: String,
    pub delivery_fee: String,
    pub total: String,
}

/// Computes the summary for a subtotal.
///
/// ## Discount Codes
/// Any non-blank code earns the configured discount. A blank code is a
/// validation error; no code at all means no discount.
pub fn compute_summary(
    subtotal: Money,
    discount_code: Option<&str>,
    config: &ConfigState,
) -> Result<OrderSummary, ApiError> {
    let discount_applied = match discount_code {
        Some(code) if code.trim().is_empty() => {
            return Err(ValidationError::Required {
                field: "discount code".to_string(),
            }
            .into());
        }
        Some(_) => true,
        None => false,
    };

    let discounted = if discount_applied {
        subtotal.apply_percentage_discount(config.discount_rate_bps)
    } else {
        subtotal
    };
    let discount = subtotal - discounted;
    let tax = discounted.calculate_tax(config.tax_rate());
    let delivery_fee = config.delivery_fee();
    let total = discounted + tax + delivery_fee;

    Ok(OrderSummary {
        subtotal_cents: subtotal.cents(),
        discount_cents: discount.cents(),
        tax_cents: tax.cents(),
        delivery_fee_cents: delivery_fee.cents(),
        total_cents: total.cents(),
        discount_applied,
        display: SummaryDisplay {
            subtotal: config.format_currency(subtotal.cents()),
            discount: config.format_currency(-discount.cents()),
            tax: config.format_currency(tax.cents()),
            delivery_fee: config.format_currency(delivery_fee.cents()),
            total: config.format_currency(total.cents()),
        },
    })
}

/// Gets the order summary for the current cart.
///
/// ## Returns
/// - CART_ERROR when the cart is empty (the cart screen shows its empty
///   state instead of a summary)
pub fn get_order_summary(
    cart: &CartStore,
    config: &ConfigState,
    discount_code: Option<&str>,
) -> Result<OrderSummary, ApiError> {
    debug!(with_code = discount_code.is_some(), "get_order_summary command");

    let (is_empty, subtotal) = cart.with_cart(|c| (c.is_empty(), c.subtotal()));
    if is_empty {
        return Err(ApiError::cart("Cart is empty"));
    }

    compute_summary(subtotal, discount_code, config)
}
