//! # Config Commands

use tracing::debug;

use crate::state::ConfigState;

/// Gets the storefront configuration (currency, tax, discount, delivery).
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
