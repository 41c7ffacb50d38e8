//! Shopping cart.
//!
//! DESIGN
//! ======
//! One line per product id, in insertion order. Totals are summed in integer
//! cents. The cart is client-side only and persists to `localStorage`.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::types::Product;
use crate::util::ui_persistence::{load_json, save_json};

pub const CART_STORAGE_KEY: &str = "paperbook_cart";

/// Most installments offered at checkout.
pub const MAX_INSTALLMENTS: u32 = 12;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn subtotal_cents(&self) -> i64 {
        self.product.price_cents().saturating_mul(i64::from(self.quantity))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

impl CartState {
    /// Add `quantity` of `product`, merging with an existing line.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.product.id == product.id) {
            item.quantity = item.quantity.saturating_add(quantity);
            item.product = product;
        } else {
            self.items.push(CartItem { product, quantity });
        }
    }

    pub fn remove(&mut self, product_id: i64) {
        self.items.retain(|item| item.product.id != product_id);
    }

    /// Set a line's quantity; zero removes the line.
    pub fn set_quantity(&mut self, product_id: i64, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().fold(0, |sum, item| sum.saturating_add(item.quantity))
    }

    pub fn total_cents(&self) -> i64 {
        self.items.iter().map(CartItem::subtotal_cents).fold(0, i64::saturating_add)
    }

    /// Interest-free installments every product in the cart allows, capped at
    /// [`MAX_INSTALLMENTS`]. Products without an offer allow one.
    pub fn max_installments(&self) -> u32 {
        self.items
            .iter()
            .map(|item| item.product.installments.unwrap_or(1))
            .min()
            .unwrap_or(1)
            .clamp(1, MAX_INSTALLMENTS)
    }
}

/// Restore the persisted cart, or an empty one.
pub fn load_cart() -> CartState {
    load_json(CART_STORAGE_KEY).unwrap_or_default()
}

/// Apply `f` to the cart signal and persist the result.
pub fn update_cart(cart: RwSignal<CartState>, f: impl FnOnce(&mut CartState)) {
    cart.update(f);
    cart.with_untracked(|state| save_json(CART_STORAGE_KEY, state));
}
