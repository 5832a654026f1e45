//! Domain models for storefront.
//!
//! The product and cart types live in `quickcart-core`; this module holds the
//! state the storefront keeps per browser session.

pub mod session;

pub use session::StorefrontSession;
