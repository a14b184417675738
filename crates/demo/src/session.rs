//! Session cart state

use leptos::prelude::*;
use rust_decimal::Decimal;

use vitrine::{
    cart::{Cart, CartEntry},
    products::Product,
};

/// Shared handle to the session's shopping cart.
///
/// Provided via context at the app root so every view reaches the same cart;
/// it lives exactly as long as the application session and is never
/// persisted.
#[derive(Debug, Clone, Copy)]
pub struct CartHandle {
    cart: RwSignal<Cart>,
}

impl CartHandle {
    /// Create a handle around an empty cart.
    pub fn new() -> Self {
        Self {
            cart: RwSignal::new(Cart::new()),
        }
    }

    /// Add `quantity` of `product`, merging with an existing entry for the
    /// same product id.
    pub fn add(&self, product: Product, quantity: u32) {
        self.cart.update(|cart| cart.add(product, quantity));
    }

    /// Reactive sum of quantities, for the nav badge.
    pub fn count(&self) -> u32 {
        self.cart.with(Cart::count)
    }

    /// Reactive grand total.
    pub fn total(&self) -> Decimal {
        self.cart.with(Cart::total)
    }

    /// Reactive emptiness check.
    pub fn is_empty(&self) -> bool {
        self.cart.with(Cart::is_empty)
    }

    /// Reactive copy of the entries, in first-add order.
    pub fn entries(&self) -> Vec<CartEntry> {
        self.cart.with(|cart| cart.entries().to_vec())
    }
}

impl Default for CartHandle {
    fn default() -> Self {
        Self::new()
    }
}
