//! # Command Bridge
//!
//! Routes JSON-line requests from the screens to command handlers.
//!
//! ## Wire Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Screen → shell (one JSON object per line)                              │
//! │    {"id": 7, "command": "increment_quantity", "args": {"id": "milk-1"}} │
//! │                                                                         │
//! │  Shell → screen                                                         │
//! │    {"id": 7, "ok": true,  "data": { items, totals, changed }}           │
//! │    {"id": 7, "ok": false, "error": { code, message }}                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `id` is optional and echoed verbatim so a screen can match responses to
//! requests. `args` may be omitted for commands without arguments.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use storefront_core::{AddToCartPayload, CartAction, UpdateQuantityPayload};
use tracing::warn;

use crate::commands;
use crate::error::ApiError;
use crate::state::{CartStore, CatalogState, ConfigState};

/// One request line.
#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Option<Value>,
    pub command: String,
    #[serde(default)]
    pub args: Value,
}

/// One response line.
#[derive(Debug, Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl Response {
    fn success(id: Option<Value>, data: Value) -> Self {
        Response {
            id,
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    fn failure(id: Option<Value>, error: ApiError) -> Self {
        Response {
            id,
            ok: false,
            data: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Deserialize)]
struct IdArgs {
    id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductIdArgs {
    product_id: String,
}

#[derive(Debug, Default, Deserialize)]
struct SearchArgs {
    #[serde(default)]
    query: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryArgs {
    #[serde(default)]
    discount_code: Option<String>,
}

/// Owns the injected state and serves commands against it.
#[derive(Debug)]
pub struct Bridge {
    cart: CartStore,
    catalog: CatalogState,
    config: ConfigState,
}

impl Bridge {
    pub fn new(cart: CartStore, catalog: CatalogState, config: ConfigState) -> Self {
        Bridge {
            cart,
            catalog,
            config,
        }
    }

    /// Handles one raw request line. Never fails: every problem becomes an
    /// error response.
    pub fn handle_line(&self, line: &str) -> Response {
        let request: Request = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "malformed request");
                let error = ApiError::bad_request(format!("Malformed request: {}", e));
                return Response::failure(None, error);
            }
        };

        match self.invoke(&request.command, request.args) {
            Ok(data) => Response::success(request.id, data),
            Err(error) => {
                warn!(command = %request.command, %error, "command failed");
                Response::failure(request.id, error)
            }
        }
    }

    /// Invokes a command by name.
    pub fn invoke(&self, command: &str, args: Value) -> Result<Value, ApiError> {
        use commands::{cart, checkout, config, product};

        match command {
            "get_cart" => respond(cart::get_cart(&self.cart)),
            "add_to_cart" => {
                let payload: AddToCartPayload = parse_args(args)?;
                respond(cart::add_to_cart(&self.cart, payload)?)
            }
            "remove_from_cart" => {
                let IdArgs { id } = parse_args(args)?;
                respond(cart::remove_from_cart(&self.cart, id))
            }
            "update_quantity" => {
                let payload: UpdateQuantityPayload = parse_args(args)?;
                respond(cart::update_quantity(&self.cart, payload)?)
            }
            "increment_quantity" => {
                let IdArgs { id } = parse_args(args)?;
                respond(cart::increment_quantity(&self.cart, id))
            }
            "decrement_quantity" => {
                let IdArgs { id } = parse_args(args)?;
                respond(cart::decrement_quantity(&self.cart, id))
            }
            "clear_cart" => respond(cart::clear_cart(&self.cart)),
            "dispatch" => {
                let action: CartAction = parse_args(args)?;
                respond(cart::dispatch_action(&self.cart, action)?)
            }
            "list_products" => respond(product::list_products(&self.catalog)),
            "get_product" => {
                let IdArgs { id } = parse_args(args)?;
                respond(product::get_product(&self.catalog, &id)?)
            }
            "search_products" => {
                let SearchArgs { query } = parse_args(args)?;
                respond(product::search_products(&self.catalog, &query)?)
            }
            "add_product_to_cart" => {
                let ProductIdArgs { product_id } = parse_args(args)?;
                respond(product::add_product_to_cart(
                    &self.catalog,
                    &self.cart,
                    &product_id,
                )?)
            }
            "get_order_summary" => {
                let SummaryArgs { discount_code } = parse_args(args)?;
                respond(checkout::get_order_summary(
                    &self.cart,
                    &self.config,
                    discount_code.as_deref(),
                )?)
            }
            "get_config" => respond(config::get_config(&self.config)),
            other => Err(ApiError::bad_request(format!("Unknown command: {}", other))),
        }
    }
}

/// Deserializes command arguments; a missing `args` reads as `{}`.
fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ApiError> {
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    serde_json::from_value(args)
        .map_err(|e| ApiError::bad_request(format!("Invalid arguments: {}", e)))
}

fn respond<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value)
        .map_err(|e| ApiError::internal(format!("Failed to encode response: {}", e)))
}
