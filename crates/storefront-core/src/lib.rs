//! # storefront-core: Pure Cart Logic for the Storefront
//!
//! This crate is the **heart** of the storefront. It owns the cart state and
//! every rule that keeps it consistent, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Mobile Screens (external)                       │   │
//! │  │     Home ──► Product Detail ──► Cart ──► Order Summary          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON lines                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 storefront-shell (apps/shell)                   │   │
//! │  │    add_to_cart, update_quantity, get_order_summary, etc.        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ storefront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │ CartState │  │   rules   │  │   │
//! │  │   │ Payloads  │  │  TaxRate  │  │CartAction │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - The cart state, its six mutations and derived queries
//! - [`types`] - Product, payloads, tax rate
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Checks callers run before handing payloads to the cart
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{AddToCartPayload, CartState, Money};
//!
//! let mut cart = CartState::new();
//! let bananas = AddToCartPayload {
//!     id: "organic-bananas".to_string(),
//!     name: "Organic Bananas".to_string(),
//!     price: "1.99".to_string(),
//!     image: String::new(),
//!     brand: "Fresh Fields".to_string(),
//! };
//!
//! cart.add_to_cart(bananas.clone());
//! cart.add_to_cart(bananas);
//!
//! assert_eq!(cart.item_count(), 1);
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.subtotal(), Money::from_cents(398));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartAction, CartLineItem, CartState};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest quantity a caller may set on a single line in one request.
///
/// The cart itself accepts any positive quantity; this bound is applied by
/// callers (see [`validation::validate_quantity_bound`]) so that totals stay
/// far away from integer overflow.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Largest unit price, in cents, a caller may put on a cart line ($99,999.99).
///
/// Together with [`MAX_ITEM_QUANTITY`] this keeps line totals and the
/// subtotal well inside `i64`.
pub const MAX_UNIT_PRICE_CENTS: i64 = 9_999_999;

/// Maximum length of a catalog search query.
pub const MAX_QUERY_LEN: usize = 100;
