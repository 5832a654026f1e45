//! Core types for Quickcart.
//!
//! This module provides type-safe wrappers for the storefront's domain
//! concepts and the cart store operations.

pub mod cart;
pub mod id;
pub mod price;
pub mod product;
pub mod status;

pub use cart::{Cart, CartEntry, CartError, total_item_count};
pub use id::*;
pub use price::Price;
pub use product::Product;
pub use status::LoadState;
