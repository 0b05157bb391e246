//! # Cart Store
//!
//! The session's one cart, shared by handle.
//!
//! ## Thread Safety
//! The [`CartState`] lives inside a `tokio::sync::watch` channel:
//! 1. Every mutation runs under the channel's write lock, so a transition is
//!    atomic and no half-applied state is ever visible
//! 2. Readers borrow the latest settled value
//! 3. Observers (screens) are woken only when a mutation actually changed
//!    something, because mutations go through `send_if_modified`
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Command                  CartStore               Observers             │
//! │  ───────                  ─────────               ─────────             │
//! │                                                                         │
//! │  add_to_cart ───────────► dispatch(action) ─────► woken if changed      │
//! │  decrement at qty 1 ────► dispatch(action) ─────► NOT woken (no-op)     │
//! │  get_cart ──────────────► with_cart(read) ──────► (read only)           │
//! │                                                                         │
//! │  NOTE: Handles are cheap clones of one channel. The store is built      │
//! │        once in `run()` and passed to whoever needs it.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use storefront_core::{CartAction, CartState};
use tokio::sync::watch;
use tracing::{debug, info};
use uuid::Uuid;

/// Result of dispatching one action: whether it changed the cart, and the
/// cart exactly as that action left it.
#[derive(Debug, Clone)]
pub struct Dispatched {
    pub changed: bool,
    pub cart: CartState,
}

/// Handle to the session's cart.
#[derive(Debug, Clone)]
pub struct CartStore {
    session_id: Uuid,
    sender: Arc<watch::Sender<CartState>>,
}

impl CartStore {
    /// Creates a new, empty cart for a fresh session.
    pub fn new() -> Self {
        let (sender, _initial) = watch::channel(CartState::new());
        CartStore {
            session_id: Uuid::new_v4(),
            sender: Arc::new(sender),
        }
    }

    /// Identifies this cart session in logs.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Executes a function with read access to the current cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let subtotal = cart_store.with_cart(|cart| cart.subtotal());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartState) -> R,
    {
        let cart = self.sender.borrow();
        f(&cart)
    }

    /// Applies an action atomically and wakes observers if it changed the cart.
    pub fn dispatch(&self, action: CartAction) -> Dispatched {
        let mut after = CartState::new();
        let changed = self.sender.send_if_modified(|cart| {
            let changed = cart.apply(action);
            after = cart.clone();
            changed
        });

        debug!(
            session = %self.session_id,
            changed,
            total_items = after.total_items(),
            "cart action applied"
        );

        Dispatched {
            changed,
            cart: after,
        }
    }

    /// Subscribes to settled cart values.
    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.sender.subscribe()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Follows the cart and logs each settled change, the way the cart badge
/// on the home screen re-renders.
///
/// Returns once every [`CartStore`] handle has been dropped.
pub async fn observe(mut updates: watch::Receiver<CartState>) {
    while updates.changed().await.is_ok() {
        let (lines, units, subtotal) = {
            let cart = updates.borrow_and_update();
            (cart.item_count(), cart.total_items(), cart.subtotal())
        };
        info!(lines, units, %subtotal, "cart updated");
    }
    debug!("cart observer stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::AddToCartPayload;

    fn bananas() -> CartAction {
        CartAction::AddToCart(AddToCartPayload {
            id: "organic-bananas".to_string(),
            name: "Organic Bananas".to_string(),
            price: "1.99".to_string(),
            image: String::new(),
            brand: "Fresh Fields".to_string(),
        })
    }

    #[test]
    fn test_handles_share_one_cart() {
        let store = CartStore::new();
        let screen_handle = store.clone();

        store.dispatch(bananas());
        screen_handle.dispatch(bananas());

        assert_eq!(store.with_cart(|c| c.total_items()), 2);
        assert_eq!(store.session_id(), screen_handle.session_id());
    }

    #[test]
    fn test_dispatch_reports_post_action_state() {
        let store = CartStore::new();
        let outcome = store.dispatch(bananas());
        assert!(outcome.changed);
        assert_eq!(outcome.cart.total_items(), 1);

        let outcome = store.dispatch(CartAction::DecrementQuantity("organic-bananas".into()));
        assert!(!outcome.changed);
        assert_eq!(outcome.cart.get("organic-bananas").unwrap().quantity, 1);
    }

    #[test]
    fn test_noop_does_not_wake_observers() {
        let store = CartStore::new();
        let mut rx = store.subscribe();

        store.dispatch(CartAction::RemoveFromCart("ghost".into()));
        assert!(!rx.has_changed().unwrap());

        store.dispatch(bananas());
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().total_items(), 1);
    }

    #[tokio::test]
    async fn test_observer_sees_changes_and_stops_on_drop() {
        let store = CartStore::new();
        let mut rx = store.subscribe();

        store.dispatch(bananas());
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().item_count(), 1);

        let observer = tokio::spawn(observe(store.subscribe()));
        drop(store);
        observer.await.unwrap();
    }
}
