//! # Commands Module
//!
//! Every command the screens can invoke through the bridge.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── product.rs   ◄─── Catalog browse/search, quick add
//! ├── checkout.rs  ◄─── Order summary (discount, tax, delivery)
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs, by reference:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartStore)
//!
//! // Only needs the catalog
//! fn search_products(catalog: &CatalogState, query: &str)
//!
//! // Needs both
//! fn add_product_to_cart(catalog: &CatalogState, cart: &CartStore, product_id: &str)
//! ```

pub mod cart;
pub mod checkout;
pub mod config;
pub mod product;
