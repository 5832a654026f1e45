//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the session as part of [`StorefrontSession`];
//! every mutation loads it, applies one cart operation and stores the result.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{FromRequest, State},
    response::{AppendHeaders, IntoResponse, Response},
};
use quickcart_core::{CartEntry, ProductId};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::models::StorefrontSession;
use crate::state::AppState;

/// HTMX event fired after any cart mutation.
pub const CART_UPDATED_EVENT: &str = "cart-updated";

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub title: String,
    pub image: String,
    pub amount: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
    pub drawer_open: bool,
}

impl From<&CartEntry> for CartItemView {
    fn from(entry: &CartEntry) -> Self {
        Self {
            id: entry.id().to_string(),
            title: entry.product.title.clone(),
            image: entry.product.image.clone(),
            amount: entry.amount,
            price: entry.product.price.to_string(),
            line_price: entry.line_total().to_string(),
        }
    }
}

impl From<&StorefrontSession> for CartView {
    fn from(state: &StorefrontSession) -> Self {
        Self {
            items: state.cart.entries().iter().map(CartItemView::from).collect(),
            subtotal: state.cart.subtotal().to_string(),
            item_count: state.cart.total_item_count(),
            drawer_open: state.drawer_open,
        }
    }
}

/// Add/remove form data.
#[derive(Debug, Deserialize)]
pub struct CartItemForm {
    pub product_id: ProductId,
}

/// Form extractor that rejects malformed bodies with a 400.
#[derive(Debug, FromRequest)]
#[from_request(via(Form), rejection(AppError))]
pub struct CartForm<T>(pub T);

/// Cart drawer fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_drawer.html")]
pub struct CartDrawerTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

impl CartDrawerTemplate {
    fn for_session(state: &StorefrontSession) -> Self {
        Self {
            cart: CartView::from(state),
        }
    }
}

/// Render the cart drawer.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<CartDrawerTemplate> {
    let state = StorefrontSession::load(&session).await?;
    Ok(CartDrawerTemplate::for_session(&state))
}

/// Add one unit of a catalog product to the cart (HTMX).
///
/// Returns the updated badge and fires `cart-updated` so the drawer refreshes.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    CartForm(form): CartForm<CartItemForm>,
) -> Result<Response> {
    let product = state.catalog().product(form.product_id).await?;

    let next = StorefrontSession::load(&session)
        .await?
        .add_to_cart(&product);
    next.save(&session).await?;

    let count = next.cart.total_item_count();
    let product_id = product.id.to_string();
    add_breadcrumb("cart", "Added product", Some(&[("product_id", product_id.as_str())]));
    tracing::info!(product_id = %product.id, count, "Added to cart");

    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED_EVENT)]),
        CartCountTemplate { count },
    )
        .into_response())
}

/// Remove one unit of a product from the cart (HTMX).
///
/// The line disappears once its amount reaches zero. Returns the drawer.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    CartForm(form): CartForm<CartItemForm>,
) -> Result<Response> {
    let next = StorefrontSession::load(&session)
        .await?
        .remove_from_cart(form.product_id);
    next.save(&session).await?;

    let product_id = form.product_id.to_string();
    add_breadcrumb("cart", "Removed product", Some(&[("product_id", product_id.as_str())]));
    tracing::info!(
        product_id = %form.product_id,
        count = next.cart.total_item_count(),
        "Removed from cart"
    );

    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED_EVENT)]),
        CartDrawerTemplate::for_session(&next),
    )
        .into_response())
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<CartCountTemplate> {
    let state = StorefrontSession::load(&session).await?;
    Ok(CartCountTemplate {
        count: state.cart.total_item_count(),
    })
}

/// Open the cart drawer.
#[instrument(skip(session))]
pub async fn open(session: Session) -> Result<CartDrawerTemplate> {
    set_drawer(&session, true).await
}

/// Close the cart drawer.
#[instrument(skip(session))]
pub async fn close(session: Session) -> Result<CartDrawerTemplate> {
    set_drawer(&session, false).await
}

async fn set_drawer(session: &Session, open: bool) -> Result<CartDrawerTemplate> {
    let next = StorefrontSession::load(session).await?.with_drawer(open);
    next.save(session).await?;
    Ok(CartDrawerTemplate::for_session(&next))
}
