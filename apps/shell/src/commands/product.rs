//! # Product Commands
//!
//! Browse, search and quick-add from the catalog.

use storefront_core::Product;
use tracing::debug;

use crate::commands::cart::{add_to_cart, CartResponse};
use crate::error::ApiError;
use crate::state::{CartStore, CatalogState};

/// Lists every product in display order.
pub fn list_products(catalog: &CatalogState) -> Vec<Product> {
    debug!("list_products command");
    catalog.all().to_vec()
}

/// Gets one product for the detail screen.
pub fn get_product(catalog: &CatalogState, id: &str) -> Result<Product, ApiError> {
    debug!(id = %id, "get_product command");
    Ok(catalog.get(id)?.clone())
}

/// Searches products by name or brand.
///
/// ## Arguments
/// * `query` - Free text; empty returns the whole catalog
pub fn search_products(catalog: &CatalogState, query: &str) -> Result<Vec<Product>, ApiError> {
    debug!(query = %query, "search_products command");
    Ok(catalog.search(query)?)
}

/// Adds a catalog product to the cart by id (the "+" button on a product
/// card).
///
/// ## User Workflow
/// ```text
/// Tap "+" on "Organic Bananas"
///      │
///      ▼
/// add_product_to_cart { productId: "organic-bananas" }
///      │
///      ├── unknown id? → NOT_FOUND, cart untouched
///      │
///      ▼
/// add_to_cart(product.to_cart_payload())
/// ```
pub fn add_product_to_cart(
    catalog: &CatalogState,
    cart: &CartStore,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_product_to_cart command");
    let payload = catalog.get(product_id)?.to_cart_payload();
    add_to_cart(cart, payload)
}
