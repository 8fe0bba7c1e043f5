//! Local persistence for the cart and order history.
//!
//! Serializes state to `localStorage` as JSON. Missing or malformed payloads
//! degrade to defaults. Requires a browser environment; outside one these
//! helpers are inert.

use crate::state::cart::CartState;
use crate::state::orders::OrdersState;

#[cfg(feature = "hydrate")]
const CART_KEY: &str = "jacferdi_cart";
#[cfg(feature = "hydrate")]
const ORDERS_KEY: &str = "jacferdi_orders";

#[cfg(feature = "hydrate")]
fn read_key(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok().flatten()?;
    storage.get_item(key).ok().flatten()
}

#[cfg(feature = "hydrate")]
fn write_key(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Load the persisted cart, or an empty one.
pub fn load_cart() -> CartState {
    #[cfg(feature = "hydrate")]
    {
        read_key(CART_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        CartState::default()
    }
}

/// Persist the cart.
pub fn save_cart(cart: &CartState) {
    #[cfg(feature = "hydrate")]
    {
        if let Ok(raw) = serde_json::to_string(cart) {
            write_key(CART_KEY, &raw);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = cart;
    }
}

/// Load the persisted order history, or an empty one.
pub fn load_orders() -> OrdersState {
    #[cfg(feature = "hydrate")]
    {
        read_key(ORDERS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OrdersState::default()
    }
}

/// Persist the order history.
pub fn save_orders(orders: &OrdersState) {
    #[cfg(feature = "hydrate")]
    {
        if let Ok(raw) = serde_json::to_string(orders) {
            write_key(ORDERS_KEY, &raw);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = orders;
    }
}
