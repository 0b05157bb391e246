//! # Validation Module
//!
//! Input checks run by callers *before* a payload reaches the cart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Screen (TypeScript)                                          │
//! │  └── Only offers ids taken from the catalog / current cart             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command bridge (storefront-shell)                            │
//! │  ├── Deserialization of the request                                    │
//! │  └── THIS MODULE: blank ids, unparseable prices, runaway quantities    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart (storefront-core::cart)                                 │
//! │  └── Lenient by contract: unknown ids / quantity <= 0 are no-ops       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_price, validate_product_id};
//!
//! validate_product_id("organic-bananas").unwrap();
//! assert_eq!(validate_price("1.99").unwrap().cents(), 199);
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::AddToCartPayload;
use crate::{MAX_ITEM_QUANTITY, MAX_QUERY_LEN, MAX_UNIT_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product / cart line id.
///
/// ## Rules
/// - Must not be blank
/// - At most 100 characters
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    require_text("id", id, 100)
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be blank
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    require_text("name", name, 200)
}

fn require_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a catalog search query.
///
/// ## Rules
/// - Can be empty (matches everything)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed, lowercased needle ready for [`crate::Product::matches`].
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_lowercase())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price string and returns the parsed amount.
///
/// Prices above [`MAX_UNIT_PRICE_CENTS`] are rejected.
pub fn validate_price(price: &str) -> ValidationResult<Money> {
    if price.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let amount = Money::parse_amount(price)?;
    if amount.cents() > MAX_UNIT_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_UNIT_PRICE_CENTS,
        });
    }

    Ok(amount)
}

/// Rejects quantities above [`MAX_ITEM_QUANTITY`].
///
/// Zero and negative quantities pass: the cart ignores them on its own, and
/// the bridge must not turn that no-op into an error.
pub fn validate_quantity_bound(qty: i64) -> ValidationResult<()> {
    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates everything the cart will freeze from an add payload.
///
/// `image` and `brand` are free-form and may be empty.
pub fn validate_add_payload(payload: &AddToCartPayload) -> ValidationResult<()> {
    validate_product_id(&payload.id)?;
    validate_product_name(&payload.name)?;
    validate_price(&payload.price)?;
    Ok(())
}
