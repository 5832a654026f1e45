//! Remote product catalog.
//!
//! # Architecture
//!
//! - [`CatalogTransport`] performs one fetch-then-parse against a source of
//!   products. [`HttpCatalogTransport`] is the production implementation; tests
//!   inject their own.
//! - [`CatalogClient`] fronts a transport with a single-entry `moka` cache so
//!   a loaded catalog is reused until it expires or is explicitly refreshed.
//!   Failed loads are never cached and never retried.
//!
//! # Example
//!
//! ```rust,ignore
//! use quickcart_storefront::catalog::CatalogClient;
//!
//! let client = CatalogClient::new(&config.catalog);
//!
//! match client.load().await {
//!     LoadState::Success(products) => render_grid(&products),
//!     LoadState::Error => render_error(),
//!     LoadState::Loading => unreachable!(),
//! }
//! ```

mod cache;
mod client;
mod transport;

use std::sync::Arc;

use quickcart_core::ProductId;
use thiserror::Error;

pub use client::CatalogClient;
pub use transport::{CatalogTransport, HttpCatalogTransport};

/// Errors that can occur when loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog endpoint answered with a non-success status.
    #[error("Catalog returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// Response body was not a product list.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Product is not in the loaded catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A load shared with concurrent callers failed.
    #[error(transparent)]
    Shared(#[from] Arc<CatalogError>),
}

impl CatalogError {
    /// Whether this error means the requested product does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::ProductNotFound(_) => true,
            Self::Shared(inner) => inner.is_not_found(),
            _ => false,
        }
    }
}
