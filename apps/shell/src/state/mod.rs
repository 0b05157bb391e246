//! # State Module
//!
//! Application state for the storefront shell.
//!
//! ## Why Multiple State Types?
//! Each command handler takes only the state it needs, and each piece of
//! state is constructed exactly once in `run()` and passed down. Nothing is
//! looked up from a global.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  run()                                                                  │
//! │   ├── CartStore::new()        ──┐                                       │
//! │   ├── CatalogState::seeded()  ──┼──► Bridge::new(cart, catalog, config) │
//! │   └── ConfigState::from_env() ──┘                                       │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  CartStore   │  │ CatalogState │  │   ConfigState    │              │
//! │  │  watch chan  │  │  products    │  │  tax, discount   │              │
//! │  │  of Cart     │  │  (read-only) │  │  delivery fee    │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartStore: mutations serialized by the watch channel's lock         │
//! │  • CatalogState / ConfigState: read-only after initialization          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
mod catalog;
mod config;

pub use cart::{CartStore, Dispatched};
pub use catalog::CatalogState;
pub use config::{ConfigError, ConfigState};
