//! Storefront shell route handler.

use askama::Template;
use askama_web::WebTemplate;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::StorefrontSession;
use crate::routes::cart::CartView;
use crate::routes::catalog::CatalogView;

/// Storefront page template.
///
/// The catalog is rendered in its loading state and swapped in by HTMX, so
/// the shell never waits on the remote catalog.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub cart: CartView,
    pub count: u64,
    pub catalog: CatalogView,
}

/// Display the storefront: cart button, cart drawer and catalog.
#[instrument(skip(session))]
pub async fn index(session: Session) -> Result<IndexTemplate> {
    let state = StorefrontSession::load(&session).await?;
    let cart = CartView::from(&state);

    Ok(IndexTemplate {
        count: cart.item_count,
        cart,
        catalog: CatalogView::loading(),
    })
}
