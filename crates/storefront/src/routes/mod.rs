//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Storefront shell (catalog loads via HTMX)
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (catalog reachable)
//!
//! # Catalog (HTMX fragments)
//! GET  /catalog                - Product grid or error state
//! POST /catalog/refresh        - Refetch catalog, return fragment
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart drawer
//! POST /cart/add               - Add one unit (returns badge, triggers cart-updated)
//! POST /cart/remove            - Remove one unit (returns drawer, triggers cart-updated)
//! GET  /cart/count             - Cart count badge
//! POST /cart/open              - Open drawer
//! POST /cart/close             - Close drawer
//! ```

pub mod cart;
pub mod catalog;
pub mod health;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::show))
        .route("/refresh", post(catalog::refresh))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
        .route("/open", post(cart::open))
        .route("/close", post(cart::close))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/catalog", catalog_routes())
        .nest("/cart", cart_routes())
}
