//! # Cart State
//!
//! The single source of truth for what the shopper has in their cart.
//!
//! ## Invariants
//! Every value of [`CartState`] a caller can observe satisfies:
//! - `total_items == Σ items[i].quantity`
//! - no two items share an `id`
//! - every item has `quantity >= 1`
//!
//! `total_items` is maintained incrementally by each mutation, never
//! recomputed from the items.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Screen Action            Operation               Effect                │
//! │  ─────────────            ─────────               ──────                │
//! │  Tap "+" on product ─────► add_to_cart ─────────► qty+1 or append       │
//! │  Tap trash icon ─────────► remove_from_cart ────► line gone             │
//! │  Type a quantity ────────► update_quantity ─────► qty = n  (n > 0)      │
//! │  Tap "+" in cart ────────► increment_quantity ──► qty+1                 │
//! │  Tap "-" in cart ────────► decrement_quantity ──► qty-1    (qty > 1)    │
//! │  Checkout / cancel ──────► clear_cart ──────────► empty                 │
//! │                                                                         │
//! │  Unknown ids and rejected quantities are NO-OPS, never errors.          │
//! │  Every operation returns whether the state changed.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Decrement floors at 1 on purpose. The only way a line leaves the cart is
//! `remove_from_cart` (or `clear_cart`).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{AddToCartPayload, UpdateQuantityPayload};

// =============================================================================
// Cart Line Item
// =============================================================================

/// One distinct product in the cart.
///
/// `name`, `brand`, `image` and `price` are frozen at the first add of this
/// id; only `quantity` changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineItem {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
    pub brand: String,
    pub quantity: i64,
}

impl CartLineItem {
    fn from_payload(payload: AddToCartPayload) -> Self {
        CartLineItem {
            id: payload.id,
            name: payload.name,
            price: payload.price,
            image: payload.image,
            brand: payload.brand,
            quantity: 1,
        }
    }

    /// Parsed unit price, or `None` when the price string is not an amount.
    pub fn unit_price(&self) -> Option<Money> {
        Money::parse_amount(&self.price).ok()
    }

    /// Unit price × quantity, or `None` when the price does not parse.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price().map(|price| price.multiply_quantity(self.quantity))
    }
}

// =============================================================================
// Cart Action
// =============================================================================

/// A cart mutation as a value.
///
/// Screens that prefer dispatching messages over calling methods send these;
/// the wire form is `{"type": "addToCart", "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
#[ts(export)]
pub enum CartAction {
    AddToCart(AddToCartPayload),
    RemoveFromCart(String),
    UpdateQuantity(UpdateQuantityPayload),
    IncrementQuantity(String),
    DecrementQuantity(String),
    ClearCart,
}

// =============================================================================
// Cart State
// =============================================================================

/// The cart aggregate: ordered line items plus the running unit count.
///
/// Fields are private so the invariants can only be touched through the
/// operations below. There is deliberately no `Deserialize`: a cart is
/// always built up from [`CartState::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartState {
    items: Vec<CartLineItem>,
    total_items: i64,
}

impl CartState {
    /// Creates an empty cart.
    pub fn new() -> Self {
        CartState::default()
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Total units across all lines (the badge number).
    pub fn total_items(&self) -> i64 {
        self.total_items
    }

    /// Number of distinct lines, not units.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up a line by id.
    pub fn get(&self, id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Σ unit price × quantity, in exact cents.
    ///
    /// Lines whose price string does not parse contribute nothing. Callers
    /// validate prices before adding (see [`crate::validation`]), so this
    /// only matters for payloads that skipped validation.
    pub fn subtotal(&self) -> Money {
        self.items.iter().filter_map(CartLineItem::line_total).sum()
    }

    fn line_mut(&mut self, id: &str) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Id already in cart: quantity + 1, metadata untouched
    /// - Id not in cart: appended with quantity 1
    /// - Total units already at `i64::MAX`: no-op
    pub fn add_to_cart(&mut self, payload: AddToCartPayload) -> bool {
        // Every line quantity is <= total_items, so one check covers both
        let Some(total_items) = self.total_items.checked_add(1) else {
            return false;
        };
        match self.line_mut(&payload.id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartLineItem::from_payload(payload)),
        }
        self.total_items = total_items;
        true
    }

    /// Removes a line and all of its units.
    pub fn remove_from_cart(&mut self, id: &str) -> bool {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };
        let removed = self.items.remove(index);
        self.total_items -= removed.quantity;
        true
    }

    /// Sets a line's quantity.
    ///
    /// ## Behavior
    /// - Quantity <= 0: no-op (does NOT remove the line)
    /// - Unknown id: no-op
    /// - Same quantity as before: no-op
    /// - New total units beyond `i64::MAX`: no-op
    pub fn update_quantity(&mut self, payload: UpdateQuantityPayload) -> bool {
        if payload.quantity <= 0 {
            return false;
        }
        let current_total = self.total_items;
        let Some(item) = self.line_mut(&payload.id) else {
            return false;
        };
        // Both quantities are positive, so the difference cannot overflow
        let diff = payload.quantity - item.quantity;
        let Some(total_items) = current_total.checked_add(diff) else {
            return false;
        };
        item.quantity = payload.quantity;
        self.total_items = total_items;
        diff != 0
    }

    /// Adds one unit to an existing line. No-op once total units reach
    /// `i64::MAX`.
    pub fn increment_quantity(&mut self, id: &str) -> bool {
        let Some(total_items) = self.total_items.checked_add(1) else {
            return false;
        };
        let Some(item) = self.line_mut(id) else {
            return false;
        };
        item.quantity += 1;
        self.total_items = total_items;
        true
    }

    /// Takes one unit off an existing line, never going below 1.
    pub fn decrement_quantity(&mut self, id: &str) -> bool {
        match self.line_mut(id) {
            Some(item) if item.quantity > 1 => {
                item.quantity -= 1;
                self.total_items -= 1;
                true
            }
            _ => false,
        }
    }

    /// Resets to the empty cart. Reports a change only if anything was there.
    pub fn clear_cart(&mut self) -> bool {
        let changed = !self.items.is_empty();
        *self = CartState::new();
        changed
    }

    /// Applies an action in place and reports whether the state changed.
    pub fn apply(&mut self, action: CartAction) -> bool {
        match action {
            CartAction::AddToCart(payload) => self.add_to_cart(payload),
            CartAction::RemoveFromCart(id) => self.remove_from_cart(&id),
            CartAction::UpdateQuantity(payload) => self.update_quantity(payload),
            CartAction::IncrementQuantity(id) => self.increment_quantity(&id),
            CartAction::DecrementQuantity(id) => self.decrement_quantity(&id),
            CartAction::ClearCart => self.clear_cart(),
        }
    }

    /// Pure transition: returns the next state and leaves `self` untouched.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{CartAction, CartState};
    ///
    /// let empty = CartState::new();
    /// let next = empty.reduce(CartAction::IncrementQuantity("ghost".into()));
    /// assert_eq!(next, empty);
    /// ```
    pub fn reduce(&self, action: CartAction) -> CartState {
        let mut next = self.clone();
        next.apply(action);
        next
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn payload(id: &str, price: &str) -> AddToCartPayload {
        AddToCartPayload {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: price.to_string(),
            image: format!("https://example.test/{}.jpg", id),
            brand: "Fresh Fields".to_string(),
        }
    }

    fn cart_with(id: &str, quantity: i64) -> CartState {
        let mut cart = CartState::new();
        cart.add_to_cart(payload(id, "2.00"));
        cart.update_quantity(UpdateQuantityPayload {
            id: id.to_string(),
            quantity,
        });
        cart
    }

    fn assert_invariants(cart: &CartState) {
        let sum: i64 = cart.items().iter().map(|i| i.quantity).sum();
        assert_eq!(cart.total_items(), sum, "total_items drifted");

        let ids: HashSet<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), cart.item_count(), "duplicate ids");

        assert!(cart.items().iter().all(|i| i.quantity >= 1));
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = CartState::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.item_count(), 0);
        assert!(cart.subtotal().is_zero());
    }

    #[test]
    fn test_add_same_id_twice_increments() {
        let mut cart = CartState::new();
        assert!(cart.add_to_cart(payload("a", "2.00")));
        assert!(cart.add_to_cart(payload("a", "2.00")));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.get("a").unwrap().quantity, 2);
        assert_eq!(cart.total_items(), 2);
        assert_invariants(&cart);
    }

    #[test]
    fn test_add_keeps_first_seen_metadata() {
        let mut cart = CartState::new();
        cart.add_to_cart(payload("a", "2.00"));

        let mut later = payload("a", "9.99");
        later.name = "Renamed".to_string();
        cart.add_to_cart(later);

        let line = cart.get("a").unwrap();
        assert_eq!(line.price, "2.00");
        assert_eq!(line.name, "Product a");
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = CartState::new();
        cart.add_to_cart(payload("b", "1.00"));
        cart.add_to_cart(payload("a", "1.00"));
        cart.add_to_cart(payload("c", "1.00"));
        cart.add_to_cart(payload("b", "1.00"));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
        assert_eq!(cart.total_items(), 4);
    }

    #[test]
    fn test_remove_drops_full_quantity() {
        let mut cart = cart_with("a", 3);
        cart.add_to_cart(payload("b", "1.00"));
        assert_eq!(cart.total_items(), 4);

        assert!(cart.remove_from_cart("a"));
        assert!(cart.get("a").is_none());
        assert_eq!(cart.total_items(), 1);
        assert_invariants(&cart);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut cart = cart_with("a", 2);
        let before = cart.clone();
        assert!(!cart.remove_from_cart("zzz"));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_quantity_adjusts_total_by_difference() {
        let mut cart = cart_with("a", 2);
        cart.add_to_cart(payload("b", "1.00"));

        assert!(cart.update_quantity(UpdateQuantityPayload {
            id: "a".to_string(),
            quantity: 7,
        }));
        assert_eq!(cart.total_items(), 8);

        assert!(cart.update_quantity(UpdateQuantityPayload {
            id: "a".to_string(),
            quantity: 1,
        }));
        assert_eq!(cart.total_items(), 2);
        assert_invariants(&cart);
    }

    #[test]
    fn test_update_quantity_rejects_non_positive() {
        let mut cart = cart_with("a", 3);
        let before = cart.clone();

        for quantity in [0, -1, i64::MIN] {
            assert!(!cart.update_quantity(UpdateQuantityPayload {
                id: "a".to_string(),
                quantity,
            }));
        }
        assert_eq!(cart, before);
        assert_eq!(cart.get("a").unwrap().quantity, 3);
    }

    #[test]
    fn test_overflowing_transitions_are_noops() {
        let mut cart = cart_with("a", 1);
        assert!(cart.update_quantity(UpdateQuantityPayload {
            id: "a".to_string(),
            quantity: i64::MAX,
        }));
        let before = cart.clone();

        assert!(!cart.increment_quantity("a"));
        assert!(!cart.add_to_cart(payload("a", "1.00")));
        assert!(!cart.add_to_cart(payload("b", "1.00")));
        assert_eq!(cart, before);
        assert_eq!(cart.total_items(), i64::MAX);

        // Room is made again once units come off
        assert!(cart.decrement_quantity("a"));
        assert!(cart.add_to_cart(payload("b", "1.00")));
        assert!(!cart.update_quantity(UpdateQuantityPayload {
            id: "b".to_string(),
            quantity: 2,
        }));
        assert_eq!(cart.total_items(), i64::MAX);
        assert_invariants(&cart);
    }

    #[test]
    fn test_update_quantity_unknown_or_same_is_noop() {
        let mut cart = cart_with("a", 3);
        let before = cart.clone();

        assert!(!cart.update_quantity(UpdateQuantityPayload {
            id: "nope".to_string(),
            quantity: 5,
        }));
        assert!(!cart.update_quantity(UpdateQuantityPayload {
            id: "a".to_string(),
            quantity: 3,
        }));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_increment() {
        let mut cart = cart_with("a", 1);
        assert!(cart.increment_quantity("a"));
        assert_eq!(cart.get("a").unwrap().quantity, 2);
        assert_eq!(cart.total_items(), 2);

        assert!(!cart.increment_quantity("missing"));
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut cart = cart_with("a", 2);
        assert!(cart.decrement_quantity("a"));
        assert_eq!(cart.get("a").unwrap().quantity, 1);

        let before = cart.clone();
        assert!(!cart.decrement_quantity("a"));
        assert_eq!(cart, before);
        assert_eq!(cart.get("a").unwrap().quantity, 1);
        assert_eq!(cart.total_items(), 1);

        assert!(!cart.decrement_quantity("missing"));
    }

    #[test]
    fn test_subtotal_in_exact_cents() {
        let mut cart = CartState::new();
        cart.add_to_cart(payload("bananas", "1.99"));
        cart.add_to_cart(payload("bananas", "1.99"));
        cart.add_to_cart(payload("bread", "4.50"));

        assert_eq!(cart.subtotal(), Money::from_cents(848));
        assert_eq!(cart.subtotal().to_string(), "$8.48");
    }

    #[test]
    fn test_subtotal_skips_unparseable_prices() {
        let mut cart = CartState::new();
        cart.add_to_cart(payload("good", "3.25"));
        cart.add_to_cart(payload("bad", "three dollars"));

        assert_eq!(cart.subtotal(), Money::from_cents(325));
        assert_eq!(cart.total_items(), 2);
        assert!(cart.get("bad").unwrap().line_total().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut cart = cart_with("a", 4);
        cart.add_to_cart(payload("b", "1.00"));

        assert!(cart.clear_cart());
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart, CartState::new());

        assert!(!cart.clear_cart());
        assert_eq!(cart, CartState::new());
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let cart = cart_with("a", 2);
        let next = cart.reduce(CartAction::IncrementQuantity("a".to_string()));

        assert_eq!(cart.get("a").unwrap().quantity, 2);
        assert_eq!(next.get("a").unwrap().quantity, 3);
        assert_eq!(next.total_items(), 3);
    }

    #[test]
    fn test_apply_dispatches_every_action() {
        let mut cart = CartState::new();
        assert!(cart.apply(CartAction::AddToCart(payload("a", "1.00"))));
        assert!(cart.apply(CartAction::IncrementQuantity("a".to_string())));
        assert!(cart.apply(CartAction::UpdateQuantity(UpdateQuantityPayload {
            id: "a".to_string(),
            quantity: 5,
        })));
        assert!(cart.apply(CartAction::DecrementQuantity("a".to_string())));
        assert_eq!(cart.total_items(), 4);
        assert!(cart.apply(CartAction::RemoveFromCart("a".to_string())));
        assert!(cart.is_empty());
        assert!(!cart.apply(CartAction::ClearCart));
    }

    #[test]
    fn test_action_wire_format() {
        let action: CartAction =
            serde_json::from_str(r#"{"type":"removeFromCart","payload":"a"}"#).unwrap();
        assert_eq!(action, CartAction::RemoveFromCart("a".to_string()));

        let action: CartAction = serde_json::from_str(r#"{"type":"clearCart"}"#).unwrap();
        assert_eq!(action, CartAction::ClearCart);

        let action: CartAction = serde_json::from_str(
            r#"{"type":"updateQuantity","payload":{"id":"a","quantity":0}}"#,
        )
        .unwrap();
        assert!(matches!(action, CartAction::UpdateQuantity(p) if p.quantity == 0));
    }

    #[test]
    fn test_state_serializes_camel_case() {
        let cart = cart_with("a", 2);
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json["totalItems"], 2);
        assert_eq!(json["items"][0]["id"], "a");
        assert_eq!(json["items"][0]["quantity"], 2);
    }

    /// Drives a long, deterministic mix of actions (including ones that
    /// should be rejected) and checks the invariants after every step.
    #[test]
    fn test_invariants_hold_across_mixed_sequence() {
        let ids = ["a", "b", "c", "d"];
        let mut seed: u64 = 0x5eed;
        let mut next = move || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 33) as usize
        };

        let mut cart = CartState::new();
        for _ in 0..2_000 {
            let id = ids[next() % ids.len()].to_string();
            let action = match next() % 7 {
                0 | 1 => CartAction::AddToCart(payload(&id, "1.25")),
                2 => CartAction::RemoveFromCart(id),
                3 => CartAction::UpdateQuantity(UpdateQuantityPayload {
                    id,
                    quantity: (next() % 12) as i64 - 3,
                }),
                4 => CartAction::IncrementQuantity(id),
                5 => CartAction::DecrementQuantity(id),
                _ if next() % 10 == 0 => CartAction::ClearCart,
                _ => CartAction::IncrementQuantity(id),
            };

            let before = cart.clone();
            let changed = cart.apply(action);
            assert_eq!(changed, cart != before);
            assert_invariants(&cart);
            assert_eq!(
                cart.subtotal(),
                Money::from_cents(125).multiply_quantity(cart.total_items())
            );
        }
    }
}
