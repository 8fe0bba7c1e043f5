#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::cart::{CartItem, CartState};

/// Currency for all catalog prices and order totals.
pub const CURRENCY: &str = "INR";

/// Errors from order placement.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("cart is empty")]
    EmptyCart,
}

/// A placed order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub items: Vec<CartItem>,
    pub total: u32,
    pub currency: String,
    /// Epoch milliseconds at placement, supplied by the caller.
    pub created_at: f64,
}

impl Order {
    /// User-facing confirmation line.
    pub fn confirmation(&self) -> String {
        format!(
            "Your order {} for {} items has been placed. The total is {} {}. \
             Thank you for shopping with Jacferdi Studios!",
            self.id,
            self.items.len(),
            self.total,
            self.currency
        )
    }
}

/// Order history for this client (persisted locally).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrdersState {
    pub orders: Vec<Order>,
}

impl OrdersState {
    /// Drain the cart into a new order.
    ///
    /// Order ids are sequential within the order history.
    pub fn place(&mut self, cart: &mut CartState, created_at: f64) -> Result<Order, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        let order = Order {
            id: format!("order-{}", self.orders.len() + 1),
            total: cart.total(),
            items: std::mem::take(&mut cart.items),
            currency: CURRENCY.to_owned(),
            created_at,
        };
        self.orders.push(order.clone());
        Ok(order)
    }

    /// The most recently placed order.
    pub fn last(&self) -> Option<&Order> {
        self.orders.last()
    }
}
