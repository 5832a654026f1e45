//! Session-related types.
//!
//! Each browser session owns one [`StorefrontSession`]. Handlers load it, apply
//! a pure transformation, and store the new value back in one piece.

use quickcart_core::{Cart, Product, ProductId};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

/// Cart and drawer state for one browser session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontSession {
    /// Cart contents.
    pub cart: Cart,
    /// Whether the cart drawer is open.
    pub drawer_open: bool,
}

/// Session keys for storefront data.
pub mod keys {
    /// Key for the [`super::StorefrontSession`] value.
    pub const STOREFRONT: &str = "storefront";
}

impl StorefrontSession {
    /// Load the session value, or a fresh one if none is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails or holds an invalid value.
    pub async fn load(session: &Session) -> Result<Self, tower_sessions::session::Error> {
        Ok(session
            .get::<Self>(keys::STOREFRONT)
            .await?
            .unwrap_or_default())
    }

    /// Replace the stored session value with this one.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn save(&self, session: &Session) -> Result<(), tower_sessions::session::Error> {
        session.insert(keys::STOREFRONT, self).await
    }

    /// Add one unit of `product` to the cart.
    #[must_use]
    pub fn add_to_cart(self, product: &Product) -> Self {
        Self {
            cart: self.cart.add(product),
            ..self
        }
    }

    /// Remove one unit of product `id` from the cart.
    #[must_use]
    pub fn remove_from_cart(self, id: ProductId) -> Self {
        Self {
            cart: self.cart.remove(id),
            ..self
        }
    }

    /// Show or hide the cart drawer.
    #[must_use]
    pub fn with_drawer(self, open: bool) -> Self {
        Self {
            drawer_open: open,
            ..self
        }
    }
}
