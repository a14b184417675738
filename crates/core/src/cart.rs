//! Shopping cart

use rust_decimal::Decimal;

use crate::products::Product;

/// One product-to-quantity pairing within the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    /// The product as it was when first added; later catalog edits are not
    /// reflected retroactively.
    pub product: Product,

    /// Positive quantity.
    pub quantity: u32,
}

impl CartEntry {
    /// Price of this line, `price × quantity`.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// In-memory cart for a single shopping session.
///
/// Entries keep the order in which distinct products were first added, with
/// at most one entry per product id. The cart only grows: there is no remove
/// or decrement operation, and it is discarded with the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `product`.
    ///
    /// If an entry for the same product id already exists its quantity is
    /// incremented and the stored product is left as originally added;
    /// otherwise a new entry is appended. Quantities below one are treated
    /// as one (callers are expected to clamp before calling).
    pub fn add(&mut self, product: Product, quantity: u32) {
        let quantity = quantity.max(1);

        match self
            .entries
            .iter_mut()
            .find(|entry| entry.product.id == product.id)
        {
            Some(entry) => entry.quantity += quantity,
            None => self.entries.push(CartEntry { product, quantity }),
        }
    }

    /// Sum of quantities across all entries.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.entries.iter().map(|entry| entry.quantity).sum()
    }

    /// Sum of line subtotals.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(CartEntry::subtotal).sum()
    }

    /// Entries in first-add order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
