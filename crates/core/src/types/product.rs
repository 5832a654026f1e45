//! Catalog product.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A product as returned by the remote catalog.
///
/// Immutable once fetched. Fields the storefront does not use (such as
/// `rating`) are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-assigned identifier.
    pub id: ProductId,
    /// Category label (e.g. "electronics").
    pub category: String,
    /// Free-text description.
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Unit price.
    pub price: Price,
    /// Display title.
    pub title: String,
}
