#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::catalog;

/// Errors from cart operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("unknown product: {0}")]
    UnknownProduct(String),
}

/// One cart line item. Price is captured at add time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub size: String,
    pub quantity: u32,
    pub price: u32,
}

/// The shopping cart.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

impl CartState {
    /// Add a catalog product to the cart and return the new line item.
    pub fn add(
        &mut self,
        product_id: &str,
        size: &str,
        quantity: u32,
    ) -> Result<CartItem, CartError> {
        let product = catalog::find(product_id)
            .ok_or_else(|| CartError::UnknownProduct(product_id.to_owned()))?;
        let item = CartItem {
            product_id: product.id.to_owned(),
            name: product.name.to_owned(),
            size: size.to_owned(),
            quantity,
            price: product.price,
        };
        self.items.push(item.clone());
        Ok(item)
    }

    /// Remove the line item at `index`. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Sum of price times quantity across all line items.
    pub fn total(&self) -> u32 {
        self.items.iter().map(|item| item.price * item.quantity).sum()
    }

    /// Total number of units in the cart.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
