//! # Domain Types
//!
//! Types shared between the cart, the catalog and the screens.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌──────────────────────┐ │
//! │  │    Product      │   │ AddToCartPayload │   │UpdateQuantityPayload │ │
//! │  │  ─────────────  │   │  ──────────────  │   │  ──────────────────  │ │
//! │  │  id             │──►│  id              │   │  id                  │ │
//! │  │  name, brand    │   │  name, brand     │   │  quantity (signed)   │ │
//! │  │  price "1.99"   │   │  price "1.99"    │   └──────────────────────┘ │
//! │  │  image          │   │  image           │                            │
//! │  └─────────────────┘   └──────────────────┘   ┌──────────────────────┐ │
//! │                                                │      TaxRate         │ │
//! │                                                │  bps (u32)           │ │
//! │                                                │  800 = 8%            │ │
//! │                                                └──────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prices stay strings end to end, exactly as the screens hand them over.
//! They are parsed to [`Money`] only when arithmetic is needed.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 800 bps = 8%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

/// Converts a percentage such as `8.25` to basis points (`825`).
///
/// Negative and non-finite inputs clamp to zero.
pub fn bps_from_percentage(pct: f64) -> u32 {
    if !pct.is_finite() || pct <= 0.0 {
        return 0;
    }
    (pct * 100.0).round() as u32
}

// =============================================================================
// Product
// =============================================================================

/// A product shown on the browse and detail screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Stable product identifier, also used as the cart line id.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Brand shown under the name.
    pub brand: String,

    /// Unit price as a decimal string, e.g. `"4.50"`.
    pub price: String,

    /// Image URL.
    pub image: String,
}

impl Product {
    /// Parses the unit price.
    pub fn unit_price(&self) -> Result<Money, ValidationError> {
        Money::parse_amount(&self.price)
    }

    /// Builds the payload a screen sends when the shopper taps "add".
    pub fn to_cart_payload(&self) -> AddToCartPayload {
        AddToCartPayload {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price.clone(),
            image: self.image.clone(),
            brand: self.brand.clone(),
        }
    }

    /// Case-insensitive match against name and brand.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.brand.to_lowercase().contains(needle)
    }
}

// =============================================================================
// Cart Payloads
// =============================================================================

/// Payload for adding a product to the cart.
///
/// The metadata is copied into the cart line the first time the id is seen;
/// later adds of the same id only bump the quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AddToCartPayload {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
    pub brand: String,
}

/// Payload for setting a line's quantity.
///
/// `quantity` is signed so that zero and negative requests can be expressed
/// (and ignored by the cart) instead of failing to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdateQuantityPayload {
    pub id: String,
    pub quantity: i64,
}
