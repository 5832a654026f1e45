//! Cache types for catalog responses.

use std::sync::Arc;

use quickcart_core::Product;

/// Cache key for catalog data.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum CacheKey {
    /// The full product list.
    Products,
}

/// Cached product list, shared between concurrent readers.
pub type CachedProducts = Arc<Vec<Product>>;
