//! The cart store.
//!
//! A [`Cart`] is an ordered list of [`CartEntry`] values keyed by product id.
//! Every operation consumes the current cart and returns the next one, so
//! callers hold exactly one cart value and replace it wholesale on change.
//!
//! # Invariants
//!
//! - No two entries share a product id.
//! - Every entry has `amount >= 1`.
//! - Entries keep the order in which their product was first added; quantity
//!   changes replace an entry in place.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Price, Product, ProductId};

/// Errors raised when rebuilding a cart from untrusted entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Two entries refer to the same product.
    #[error("duplicate cart entry for product {0}")]
    DuplicateEntry(ProductId),
    /// An entry has a zero quantity.
    #[error("cart entry for product {0} has zero amount")]
    ZeroAmount(ProductId),
}

/// A product plus the quantity currently selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// The product as it was when first added.
    pub product: Product,
    /// Quantity, always at least 1 inside a [`Cart`].
    pub amount: u32,
}

impl CartEntry {
    /// A fresh entry with `amount = 1`.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self { product, amount: 1 }
    }

    /// Product id of this entry.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times amount.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.amount)
    }
}

/// Ordered cart contents owned by a single session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartEntry>", into = "Vec<CartEntry>")]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing entry in place, or appends a new entry with
    /// `amount = 1` when the product is not in the cart yet.
    #[must_use]
    pub fn add(self, product: &Product) -> Self {
        let mut entries = self.entries;

        match entries.iter_mut().find(|entry| entry.id() == product.id) {
            Some(entry) => entry.amount = entry.amount.saturating_add(1),
            None => entries.push(CartEntry::new(product.clone())),
        }

        Self { entries }
    }

    /// Remove one unit of the product with `id`.
    ///
    /// The entry is evicted once its amount reaches zero. Unknown ids leave the
    /// cart unchanged.
    #[must_use]
    pub fn remove(self, id: ProductId) -> Self {
        let entries = self
            .entries
            .into_iter()
            .filter_map(|entry| {
                if entry.id() != id {
                    return Some(entry);
                }
                let amount = entry.amount.saturating_sub(1);
                (amount > 0).then_some(CartEntry { amount, ..entry })
            })
            .collect();

        Self { entries }
    }

    /// Sum of `amount` over all entries.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        total_item_count(&self.entries)
    }

    /// Sum of every entry's line total.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Entries in first-added order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Entry for `id`, if present.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<CartEntry>> for Cart {
    type Error = CartError;

    fn try_from(entries: Vec<CartEntry>) -> Result<Self, Self::Error> {
        for (i, entry) in entries.iter().enumerate() {
            if entry.amount == 0 {
                return Err(CartError::ZeroAmount(entry.id()));
            }
            if entries.iter().take(i).any(|prior| prior.id() == entry.id()) {
                return Err(CartError::DuplicateEntry(entry.id()));
            }
        }
        Ok(Self { entries })
    }
}

impl From<Cart> for Vec<CartEntry> {
    fn from(cart: Cart) -> Self {
        cart.entries
    }
}

/// Sum of `amount` over `entries`; zero for an empty slice.
#[must_use]
pub fn total_item_count(entries: &[CartEntry]) -> u64 {
    entries.iter().map(|entry| u64::from(entry.amount)).sum()
}
