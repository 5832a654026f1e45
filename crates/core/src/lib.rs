//! Quickcart Core - Shared domain types.
//!
//! This crate provides the types used by every Quickcart component:
//! - `storefront` - Public-facing catalog and cart UI
//! - `integration-tests` - End-to-end tests against a live storefront
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no HTTP
//! clients, no session handling. This keeps the cart rules testable in
//! isolation and usable anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product identifiers, prices, products, the cart store and
//!   load states

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
