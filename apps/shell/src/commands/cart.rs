//! # Cart Commands
//!
//! Bridge commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│  Order   │                        │
//! │  │  Cart    │     │          │     │ Summary  │                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │       ▲                │                                                │
//! │       │           add_to_cart / increment / decrement                   │
//! │       │           update_quantity / remove_from_cart                    │
//! │       │                │                                                │
//! │       └── clear_cart ◄─┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every cart command answers with the full cart and a `changed` flag, so a
//! screen can tell a rejected request (decrement at 1, unknown id) from an
//! applied one without a second round trip.

use serde::Serialize;
use storefront_core::validation::{validate_add_payload, validate_quantity_bound};
use storefront_core::{
    AddToCartPayload, CartAction, CartLineItem, CartState, UpdateQuantityPayload,
};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartStore, Dispatched};

/// Cart totals for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct lines
    pub item_count: usize,
    /// Units across all lines (badge number)
    pub total_items: i64,
    pub subtotal_cents: i64,
    /// Subtotal formatted as `$8.48`
    pub subtotal: String,
}

impl From<&CartState> for CartTotals {
    fn from(cart: &CartState) -> Self {
        let subtotal = cart.subtotal();
        CartTotals {
            item_count: cart.item_count(),
            total_items: cart.total_items(),
            subtotal_cents: subtotal.cents(),
            subtotal: subtotal.to_string(),
        }
    }
}

/// Cart response including items, totals and whether the request changed
/// anything.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
    pub changed: bool,
}

impl CartResponse {
    fn new(cart: &CartState, changed: bool) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
            changed,
        }
    }
}

impl From<Dispatched> for CartResponse {
    fn from(outcome: Dispatched) -> Self {
        CartResponse::new(&outcome.cart, outcome.changed)
    }
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  MY CART                                           3 items     │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Organic Bananas         x2              $3.98               │    │
/// │  │  Sourdough Bread         x1              $4.50               │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Subtotal                                $8.48               │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                                                                         │
/// │  get_cart → { items: [...], totals: {...}, changed: false }             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartStore) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::new(c, false))
}

/// Applies a raw cart action after the same checks the named commands run.
pub fn dispatch_action(cart: &CartStore, action: CartAction) -> Result<CartResponse, ApiError> {
    match &action {
        CartAction::AddToCart(payload) => validate_add_payload(payload)?,
        CartAction::UpdateQuantity(payload) => validate_quantity_bound(payload.quantity)?,
        _ => {}
    }
    Ok(cart.dispatch(action).into())
}

/// Adds one unit of a product to the cart.
///
/// ## Behavior
/// - Already in cart: quantity increases by 1
/// - Not in cart: added with quantity 1
/// - Blank id/name or unparseable price: VALIDATION_ERROR, cart untouched
pub fn add_to_cart(cart: &CartStore, payload: AddToCartPayload) -> Result<CartResponse, ApiError> {
    debug!(id = %payload.id, "add_to_cart command");
    dispatch_action(cart, CartAction::AddToCart(payload))
}

/// Removes a line from the cart.
pub fn remove_from_cart(cart: &CartStore, id: String) -> CartResponse {
    debug!(id = %id, "remove_from_cart command");
    cart.dispatch(CartAction::RemoveFromCart(id)).into()
}

/// Sets a line's quantity.
///
/// ## Behavior
/// - Quantity <= 0: accepted, no change (`changed: false`)
/// - Quantity > 999: VALIDATION_ERROR
pub fn update_quantity(
    cart: &CartStore,
    payload: UpdateQuantityPayload,
) -> Result<CartResponse, ApiError> {
    debug!(id = %payload.id, quantity = payload.quantity, "update_quantity command");
    dispatch_action(cart, CartAction::UpdateQuantity(payload))
}

pub fn increment_quantity(cart: &CartStore, id: String) -> CartResponse {
    debug!(id = %id, "increment_quantity command");
    cart.dispatch(CartAction::IncrementQuantity(id)).into()
}

/// Takes one unit off a line; at quantity 1 nothing happens.
pub fn decrement_quantity(cart: &CartStore, id: String) -> CartResponse {
    debug!(id = %id, "decrement_quantity command");
    cart.dispatch(CartAction::DecrementQuantity(id)).into()
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &CartStore) -> CartResponse {
    debug!("clear_cart command");
    cart.dispatch(CartAction::ClearCart).into()
}
